//! Parsing of user-entered values
//!
//! Numbers follow the leading-integer rule: surrounding whitespace is ignored, an
//! optional sign is accepted, and parsing stops at the first non-digit. `"12abc"`
//! reads as `12`; `"abc"` is rejected.

use crate::errors::{Result, VisualizerError};

/// Parse a single integer from user input
pub fn parse_int(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(VisualizerError::InvalidNumber {
            input: text.trim().to_string(),
        });
    }

    // Overlong literals are treated as not-a-number rather than wrapped
    let magnitude: i64 = digits[..end]
        .parse()
        .map_err(|_| VisualizerError::InvalidNumber {
            input: text.trim().to_string(),
        })?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse a comma-separated list of integers, dropping tokens that are not numbers
pub fn parse_array(text: &str) -> Result<Vec<i64>> {
    let values: Vec<i64> = text
        .split(',')
        .filter_map(|token| parse_int(token).ok())
        .collect();

    if values.is_empty() {
        return Err(VisualizerError::EmptyArray);
    }
    Ok(values)
}

/// Parse a node id and check it against the graph size
pub fn parse_node_id(text: &str, node_count: usize) -> Result<usize> {
    let id = parse_int(text)?;
    if id < 0 || id as usize >= node_count {
        return Err(VisualizerError::NodeOutOfRange {
            id,
            max: node_count.saturating_sub(1),
        });
    }
    Ok(id as usize)
}

/// Parse a `start,end` (or `start end`) pair of node ids
pub fn parse_node_pair(text: &str, node_count: usize) -> Result<(usize, usize)> {
    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let start = parts.next().ok_or_else(|| VisualizerError::InvalidNumber {
        input: text.trim().to_string(),
    })?;
    let end = parts.next().ok_or_else(|| VisualizerError::InvalidNumber {
        input: text.trim().to_string(),
    })?;

    Ok((
        parse_node_id(start, node_count)?,
        parse_node_id(end, node_count)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer_rule() {
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int("  -7 "), Ok(-7));
        assert_eq!(parse_int("+3"), Ok(3));
        assert_eq!(parse_int("12abc"), Ok(12));
        assert_eq!(parse_int("3.9"), Ok(3));
        assert!(matches!(
            parse_int("abc"),
            Err(VisualizerError::InvalidNumber { .. })
        ));
        assert!(parse_int("").is_err());
        assert!(parse_int("-").is_err());
    }

    #[test]
    fn test_array_drops_non_numeric_tokens() {
        assert_eq!(parse_array("5, x, 3,,8"), Ok(vec![5, 3, 8]));
        assert_eq!(parse_array("a,b"), Err(VisualizerError::EmptyArray));
        assert_eq!(parse_array(""), Err(VisualizerError::EmptyArray));
    }

    #[test]
    fn test_node_ids_are_bounded() {
        assert_eq!(parse_node_id("5", 6), Ok(5));
        assert_eq!(
            parse_node_id("6", 6),
            Err(VisualizerError::NodeOutOfRange { id: 6, max: 5 })
        );
        assert!(parse_node_id("-1", 6).is_err());
        assert_eq!(parse_node_pair("0,5", 6), Ok((0, 5)));
        assert_eq!(parse_node_pair("2 3", 6), Ok((2, 3)));
        assert!(parse_node_pair("2", 6).is_err());
    }
}
