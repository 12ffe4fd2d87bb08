//! Utilities
use std::io::Write;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

const BYTES_PER_GIB: f64 = 1024_f64 * 1024_f64 * 1024_f64;

pub fn set_regex(
    regex: &Option<String>,
) -> Result<Regex>
{
    match regex {
        Some(regex) => Regex::new(regex.as_str())
            .with_context(|| format!("Invalid regular expression: {}", regex)),
        None => Regex::new(".*")
            .with_context(|| "Invalid default regular expression"),
    }
}

pub fn bytes_to_gib(bytes: f64) -> f64 {
    bytes / BYTES_PER_GIB
}

/// Prints `goal` followed by `data` as pretty json.
pub fn write_json<T: Serialize, W: Write + ?Sized>(
    out: &mut W,
    goal: &str,
    data: &T,
) -> Result<()>
{
    let json = serde_json::to_string_pretty(data)
        .with_context(|| format!("Error serializing {}", goal))?;
    writeln!(out, "{} {}", goal, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_set_regex_default_matches_everything() {
        let regex = set_regex(&None).unwrap();
        assert!(regex.is_match("i-0145c907e4d8ff74c"));
    }
    #[test]
    fn unit_set_regex_invalid() {
        assert!(set_regex(&Some("i-(".to_string())).is_err());
    }
    #[test]
    fn unit_bytes_to_gib() {
        assert_eq!(bytes_to_gib(1073741824.0), 1.0);
        assert_eq!(bytes_to_gib(600.0), 600.0 / 1024.0 / 1024.0 / 1024.0);
        assert_eq!(bytes_to_gib(0.0), 0.0);
    }
    #[test]
    fn unit_write_json() {
        let mut out: Vec<u8> = Vec::new();
        write_json(&mut out, "Query Results", &vec![1.0, 2.5]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Query Results ["));
        assert!(text.contains("2.5"));
    }
}
