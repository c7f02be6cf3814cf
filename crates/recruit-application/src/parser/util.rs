//! Shared parsing helpers: prefix tokenization, index and field validation.

use recruit_core::error::{RecruitError, Result};

use crate::command::Index;

pub(crate) const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer";

/// Tokenized `x/value` arguments plus the untagged preamble.
///
/// A prefix claims every following token up to the next recognized prefix, so
/// values may contain spaces. Repeated prefixes keep all occurrences; `value`
/// returns the last one, matching the original's take-the-last behavior.
#[derive(Debug)]
pub(crate) struct ArgumentMap {
    preamble: String,
    values: Vec<(&'static str, String)>,
}

impl ArgumentMap {
    pub(crate) fn preamble(&self) -> &str {
        &self.preamble
    }

    pub(crate) fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn all_values(&self, prefix: &str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub(crate) fn has(&self, prefix: &str) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }
}

pub(crate) fn tokenize(arguments: &str, prefixes: &[&'static str]) -> ArgumentMap {
    let mut preamble_parts: Vec<&str> = Vec::new();
    let mut values: Vec<(&'static str, String)> = Vec::new();
    let mut current: Option<(&'static str, Vec<&str>)> = None;

    for token in arguments.split_whitespace() {
        if let Some(prefix) = prefixes.iter().copied().find(|p| token.starts_with(*p)) {
            if let Some((p, parts)) = current.take() {
                values.push((p, parts.join(" ").trim().to_string()));
            }
            current = Some((prefix, vec![&token[prefix.len()..]]));
        } else if let Some((_, parts)) = current.as_mut() {
            parts.push(token);
        } else {
            preamble_parts.push(token);
        }
    }
    if let Some((p, parts)) = current.take() {
        values.push((p, parts.join(" ").trim().to_string()));
    }

    ArgumentMap {
        preamble: preamble_parts.join(" "),
        values,
    }
}

/// Parses a 1-based positive integer index token.
pub(crate) fn parse_index(token: &str) -> Result<Index> {
    let trimmed = token.trim();
    match trimmed.parse::<usize>() {
        Ok(position) if position > 0 => Ok(Index::from_one_based(position)),
        _ => Err(RecruitError::parse(MESSAGE_INVALID_INDEX)),
    }
}

// ============================================================================
// Field validation
// ============================================================================

pub(crate) fn parse_name(value: &str) -> Result<String> {
    let name = value.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == ' ') {
        return Err(RecruitError::parse(
            "Names should only contain alphanumeric characters and spaces, and should not be blank",
        ));
    }
    Ok(name.to_string())
}

pub(crate) fn parse_phone(value: &str) -> Result<String> {
    let phone = value.trim();
    if phone.len() < 3 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(RecruitError::parse(
            "Phone numbers should only contain digits, and should be at least 3 digits long",
        ));
    }
    Ok(phone.to_string())
}

pub(crate) fn parse_email(value: &str) -> Result<String> {
    let email = value.trim();
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(RecruitError::parse(
            "Emails should be of the format local-part@domain",
        ));
    }
    Ok(email.to_string())
}

pub(crate) fn parse_headcount(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(RecruitError::parse(
            "Headcount should be a positive whole number",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_prefixed_values() {
        let map = tokenize("n/Alice Pauline p/91234567 t/java t/sql", &["n/", "p/", "t/"]);
        assert_eq!(map.value("n/"), Some("Alice Pauline"));
        assert_eq!(map.value("p/"), Some("91234567"));
        assert_eq!(map.all_values("t/"), vec!["java", "sql"]);
        assert_eq!(map.preamble(), "");
    }

    #[test]
    fn tokenize_keeps_preamble_before_first_prefix() {
        let map = tokenize("candidate 2 p/91234567", &["n/", "p/"]);
        assert_eq!(map.preamble(), "candidate 2");
        assert_eq!(map.value("p/"), Some("91234567"));
    }

    #[test]
    fn repeated_prefix_takes_last_value() {
        let map = tokenize("n/Alice n/Bob", &["n/"]);
        assert_eq!(map.value("n/"), Some("Bob"));
    }

    #[test]
    fn bare_prefix_yields_empty_value() {
        let map = tokenize("t/", &["t/"]);
        assert!(map.has("t/"));
        assert_eq!(map.all_values("t/"), vec![""]);
    }

    #[test]
    fn parse_index_accepts_positive_integers_only() {
        assert_eq!(parse_index("1").unwrap(), Index::from_one_based(1));
        assert_eq!(parse_index(" 10 ").unwrap(), Index::from_one_based(10));
        for bad in ["0", "-1", "abc", "", "1.5"] {
            assert!(parse_index(bad).unwrap_err().is_parse(), "accepted {bad:?}");
        }
    }

    #[test]
    fn field_validators_reject_malformed_input() {
        assert!(parse_name("Alice Pauline").is_ok());
        assert!(parse_name("peter*").is_err());
        assert!(parse_phone("91234567").is_ok());
        assert!(parse_phone("91").is_err());
        assert!(parse_phone("phone").is_err());
        assert!(parse_email("alice@example.com").is_ok());
        assert!(parse_email("alice.example.com").is_err());
        assert!(parse_headcount("3").is_ok());
        assert!(parse_headcount("0").is_err());
    }
}
