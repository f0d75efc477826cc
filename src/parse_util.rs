//! Utilities for parse_member_lists.rs

use std::io::Write;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use tempfile::NamedTempFile;
use reqwest::header::{ACCEPT, USER_AGENT};

/// Temporary file directory. Should be in same filesystem as PAGE_CACHE.
pub(crate) const TEMP_DIR: &'static str = "data/temp";
const UA: &'static str = "uk-members-scrape/0.1 (one-shot data extraction; not a crawler)";

/// Download from a URL to a temporary file. A non-success status is an error.
pub(crate) async fn download_to_file(client: &Client, url: &str) -> anyhow::Result<NamedTempFile> {
    println!("Downloading {}", url);
    std::fs::create_dir_all(TEMP_DIR)?;
    let mut file = NamedTempFile::new_in(TEMP_DIR)?;
    let response = client.get(url)
        .header(USER_AGENT, UA)
        .header(ACCEPT, "text/html")
        .send()
        .await?
        .error_for_status()?;
    let content = response.bytes().await?;
    file.write_all(&content)?;
    file.flush()?;
    Ok(file)
}

/// Collapse runs of whitespace to single spaces and trim. Element text comes out
/// of the markup as fragments with stray newlines and indentation.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
    WHITESPACE.replace_all(s.trim(), " ").to_string()
}

/// Honorific titles stripped from the front of a display name before splitting.
/// At most one is stripped, in this order.
const TITLES: &[&str] = &[
    "The Rt Hon ", "Rt Hon ", "Sir ", "Dame ", "Dr ", "Mr ", "Ms ", "Mrs ", "Miss ",
    "Lord ", "Lady ", "Baroness ", "Baron ", "Earl ", "Countess ", "Viscount ", "Viscountess ",
    "Duke ", "Duchess ", "Marquess ", "Marchioness ", "Rev ", "Revd ", "Father ", "Mother ",
    "Professor ", "Prof ", "Colonel ", "Major ", "Captain ", "Lieutenant ", "Admiral ",
    "General ", "Air Marshal ", "Group Captain ", "Wing Commander ", "Squadron Leader ",
];

/// Split a display name into (first name, last name), stripping a leading title.
/// A single-word name goes entirely into the first name.
pub(crate) fn split_name(full_name: &str) -> (String, String) {
    let mut name = full_name.trim();
    for title in TITLES {
        if let Some(rest) = name.strip_prefix(title) {
            name = rest.trim_start();
            break;
        }
    }
    match name.split_once(' ') {
        Some((first, last)) => (first.trim().to_string(), last.trim().to_string()),
        None => (name.to_string(), String::new()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name() {
        assert_eq!(("Diane".to_string(), "Abbott".to_string()), split_name("Ms Diane Abbott"));
        assert_eq!(("Keir".to_string(), "Starmer".to_string()), split_name("Sir Keir Starmer"));
        assert_eq!(("Smith".to_string(), "of Basildon".to_string()), split_name("Baroness Smith of Basildon"));
        assert_eq!(("Plain".to_string(), "Name".to_string()), split_name("Plain Name"));          // No title to strip
        assert_eq!(("Mononym".to_string(), "".to_string()), split_name("Mononym"));               // Single word
        assert_eq!(("Sajid".to_string(), "Javid".to_string()), split_name("The Rt Hon Sajid Javid"));
        assert_eq!(("Sir".to_string(), "Keir Starmer".to_string()), split_name("The Rt Hon Sir Keir Starmer")); // Only one title is stripped
        assert_eq!(("Diane".to_string(), "Abbott".to_string()), split_name("  Ms Diane Abbott  "));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!("Hackney North and Stoke Newington", collapse_whitespace("\n  Hackney North\n    and Stoke Newington "));
        assert_eq!("Labour", collapse_whitespace("Labour"));
        assert_eq!("", collapse_whitespace("  \n\t "));
    }
}
