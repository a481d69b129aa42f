//! Middleware notation parsing.
//!
//! Routes declare middlewares as compact strings:
//!
//! ```text
//! <key>[@<phase>][:<param1>[,<param2>...]]
//! ```
//!
//! | Notation               | Key        | Phase    | Parameters     |
//! |------------------------|------------|----------|----------------|
//! | `auth`                 | `auth`     | `before` | none           |
//! | `auth@after`           | `auth`     | `after`  | none           |
//! | `throttle@before:10,60`| `throttle` | `before` | `10`, `60`     |
//! | `acl:admin`            | `acl`      | `before` | `admin`        |
//!
//! The key, phase, and parameter scans are each independent passes over the
//! raw string: the key is everything before the first `@` (bounded by the
//! first `:` when no `@` is present), the phase token sits between the first
//! `@` and the next `:` after it, and the parameter list is whatever follows
//! the last `:`, split on `,`. Parsing happens during route compilation and
//! fails fast; a notation never reaches dispatch half-parsed.

use crate::middleware::{Middleware, Phase};
use talaria_core::{TalariaError, TalariaResult};

/// Separates the key from the phase token.
const PHASE_DELIMITER: char = '@';
/// Separates the phase token (or key) from the parameter list.
const PARAMETER_LIST_DELIMITER: char = ':';
/// Separates individual parameters.
const PARAMETER_DELIMITER: char = ',';

/// Parses one middleware notation into a [`Middleware`] value.
///
/// # Errors
///
/// Returns a validation error when the key is empty or when an explicit
/// phase token is anything other than `before` or `after`.
///
/// # Example
///
/// ```
/// use talaria_middleware::{notation::parse_notation, Phase};
///
/// let middleware = parse_notation("throttle@before:10,60")?;
/// assert_eq!(middleware.key(), "throttle");
/// assert_eq!(middleware.phase(), Phase::Before);
/// assert_eq!(middleware.parameters(), ["10", "60"]);
/// # Ok::<(), talaria_core::TalariaError>(())
/// ```
pub fn parse_notation(notation: &str) -> TalariaResult<Middleware> {
    let key = extract_key(notation);
    if key.is_empty() {
        return Err(TalariaError::validation_for_notation(
            "middleware notation has an empty key",
            notation,
        ));
    }

    let mut middleware = Middleware::new(key);

    if let Some(token) = extract_phase_token(notation) {
        let phase = token.parse::<Phase>().map_err(|err| match err {
            TalariaError::Validation { message, .. } => TalariaError::Validation {
                message,
                notation: Some(notation.to_string()),
            },
            other => other,
        })?;
        middleware = middleware.with_phase(phase);
    }

    let parameters = extract_parameters(notation);
    if !parameters.is_empty() {
        middleware = middleware.with_parameters(parameters);
    }

    Ok(middleware)
}

/// Parses a sequence of notations, stopping at the first invalid one.
pub fn parse_notations<I, S>(notations: I) -> TalariaResult<Vec<Middleware>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    notations
        .into_iter()
        .map(|notation| parse_notation(notation.as_ref()))
        .collect()
}

fn extract_key(notation: &str) -> &str {
    match notation.find(PHASE_DELIMITER) {
        Some(at) => &notation[..at],
        None => match notation.find(PARAMETER_LIST_DELIMITER) {
            Some(colon) => &notation[..colon],
            None => notation,
        },
    }
}

fn extract_phase_token(notation: &str) -> Option<&str> {
    let at = notation.find(PHASE_DELIMITER)?;
    let tail = &notation[at + PHASE_DELIMITER.len_utf8()..];
    match tail.find(PARAMETER_LIST_DELIMITER) {
        Some(colon) => Some(&tail[..colon]),
        None => Some(tail),
    }
}

fn extract_parameters(notation: &str) -> Vec<String> {
    match notation.rfind(PARAMETER_LIST_DELIMITER) {
        Some(colon) => notation[colon + PARAMETER_LIST_DELIMITER.len_utf8()..]
            .split(PARAMETER_DELIMITER)
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_key() {
        let middleware = parse_notation("auth").unwrap();
        assert_eq!(middleware.key(), "auth");
        assert_eq!(middleware.phase(), Phase::Before);
        assert!(middleware.parameters().is_empty());
    }

    #[test]
    fn test_parse_key_with_phase() {
        let middleware = parse_notation("auth@after").unwrap();
        assert_eq!(middleware.key(), "auth");
        assert_eq!(middleware.phase(), Phase::After);
        assert!(middleware.parameters().is_empty());
    }

    #[test]
    fn test_parse_key_phase_and_parameters() {
        let middleware = parse_notation("throttle@before:10,60").unwrap();
        assert_eq!(middleware.key(), "throttle");
        assert_eq!(middleware.phase(), Phase::Before);
        assert_eq!(middleware.parameters(), ["10", "60"]);
    }

    #[test]
    fn test_parse_parameters_without_phase() {
        let middleware = parse_notation("acl:admin,write").unwrap();
        assert_eq!(middleware.key(), "acl");
        assert_eq!(middleware.phase(), Phase::Before);
        assert_eq!(middleware.parameters(), ["admin", "write"]);
    }

    #[test]
    fn test_parse_rejects_invalid_phase() {
        let err = parse_notation("x@sideways").unwrap_err();
        assert!(matches!(
            &err,
            talaria_core::TalariaError::Validation {
                notation: Some(n), ..
            } if n == "x@sideways"
        ));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_parse_rejects_empty_phase_token() {
        assert!(parse_notation("auth@").is_err());
        assert!(parse_notation("auth@:10").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_key() {
        assert!(parse_notation("").is_err());
        assert!(parse_notation("@after").is_err());
        assert!(parse_notation(":10,60").is_err());
    }

    #[test]
    fn test_parse_parameters_follow_last_colon() {
        // Colons inside the parameter text restart the list; only the
        // segment after the last colon is split.
        let middleware = parse_notation("cache@after:a:b,c").unwrap();
        assert_eq!(middleware.key(), "cache");
        assert_eq!(middleware.phase(), Phase::After);
        assert_eq!(middleware.parameters(), ["b", "c"]);
    }

    #[test]
    fn test_parse_trailing_colon_keeps_one_empty_parameter() {
        // A trailing delimiter declares one empty parameter, not an empty
        // list.
        let middleware = parse_notation("auth@before:").unwrap();
        assert_eq!(middleware.key(), "auth");
        assert_eq!(middleware.phase(), Phase::Before);
        assert_eq!(middleware.parameters(), [""]);

        let middleware = parse_notation("acl:").unwrap();
        assert_eq!(middleware.key(), "acl");
        assert_eq!(middleware.parameters(), [""]);
    }

    #[test]
    fn test_parse_notations_fails_fast() {
        let ok = parse_notations(["auth", "throttle@before:10,60"]).unwrap();
        assert_eq!(ok.len(), 2);

        let err = parse_notations(["auth", "x@sideways", "acl:admin"]).unwrap_err();
        assert!(matches!(
            err,
            talaria_core::TalariaError::Validation { .. }
        ));
    }
}
