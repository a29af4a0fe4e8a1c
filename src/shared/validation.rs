use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Comma-separated list of numeric item ids, whitespace allowed around commas
    /// - Valid: "1", "1,2,3", "1, 2,3", " 4 , 5 "
    /// - Invalid: "", "1,", "1,,2", "a,b", "1;2", "-1"
    pub static ref ITEM_IDS_REGEX: Regex = Regex::new(r"^\s*\d+\s*(?:,\s*\d+\s*)*$").unwrap();
}

/// Parse a comma-separated item id list.
///
/// A blank input yields an empty list. Any token that is empty or not an
/// integer rejects the whole list. Duplicates are dropped, keeping the first
/// occurrence.
pub fn parse_item_ids(raw: &str) -> Result<Vec<i32>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut ids: Vec<i32> = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::Validation(
                "items must not contain empty ids".to_string(),
            ));
        }

        let id = token
            .parse::<i32>()
            .map_err(|_| AppError::Validation(format!("items contains invalid id '{}'", token)))?;

        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Ok(ids)
}
