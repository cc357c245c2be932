//! Input checks applied to command-line values before any request is sent.

use anyhow::{bail, Result};
use itunes_api::types::{LookupSort, Media};

pub const MAX_TERM_LENGTH: usize = 255;

/// Replace ASCII control characters with spaces, collapse runs of whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String> {
    if input.len() > max_len {
        bail!("input exceeds maximum length of {} bytes", max_len);
    }
    let sanitized = input
        .chars()
        .map(|c| if c.is_ascii_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if sanitized.is_empty() {
        bail!("input is empty after sanitization");
    }
    Ok(sanitized)
}

pub fn validate_term(input: &str) -> Result<String> {
    sanitize_text(input, MAX_TERM_LENGTH)
}

/// Two-letter ISO 3166-1 alpha-2 store code, returned uppercase.
pub fn validate_country(input: &str) -> Result<String> {
    let upper = input.trim().to_uppercase();
    if upper.len() == 2 && upper.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(upper)
    } else {
        bail!(
            "invalid country code '{}'. Expected a two-letter code such as US, GB, JP",
            input
        )
    }
}

pub fn validate_limit(limit: u32) -> Result<u32> {
    if !(1..=200).contains(&limit) {
        bail!("limit must be between 1 and 200");
    }
    Ok(limit)
}

pub fn validate_media(input: &str) -> Result<Media> {
    match input.trim().parse::<Media>() {
        Ok(media) => Ok(media),
        Err(()) => bail!(
            "unknown media '{}'. Valid values: {}",
            input,
            Media::ALL
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Accepts yes/no (or y/n), case-insensitive.
pub fn validate_explicit(input: &str) -> Result<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => bail!("unknown explicit value '{}'. Valid values: yes, no", input),
    }
}

pub fn validate_sort(input: &str) -> Result<LookupSort> {
    match input.trim().to_lowercase().parse::<LookupSort>() {
        Ok(sort) => Ok(sort),
        Err(()) => bail!("unknown sort '{}'. Valid values: recent", input),
    }
}
