//! Identity and identifier checks run before any request is built.

use uuid::{Uuid, Version};
use validator::ValidateEmail;

use crate::error::{UserError, UserResult};

/// Top-level domains reserved for special use that can never receive mail
const SPECIAL_USE_TLDS: &[&str] = &["arpa", "invalid", "local", "localhost", "onion", "test"];

/// What to do with a caller-supplied identifier that is not a UUID v4
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentifierPolicy {
    /// Log and replace it with a fresh v4 value
    #[default]
    Regenerate,
    /// Fail with `UserError::InvalidIdentifier`
    Reject,
}

/// Validate an email identity and return its canonical lower-case form.
///
/// Syntax is checked by `validator`; on top of that the domain must be a
/// dotted hostname (no IP literals, no empty labels) with a non-numeric,
/// non-reserved top-level domain.
pub fn validate_identity(raw: &str) -> UserResult<String> {
    if !raw.contains('@') {
        return Err(UserError::invalid_identity(raw, "missing '@'"));
    }
    if !raw.validate_email() {
        return Err(UserError::invalid_identity(raw, "malformed email address"));
    }

    let (_, domain) = raw
        .rsplit_once('@')
        .ok_or_else(|| UserError::invalid_identity(raw, "missing '@'"))?;
    check_domain(domain).map_err(|reason| UserError::invalid_identity(raw, reason))?;

    Ok(raw.to_lowercase())
}

fn check_domain(domain: &str) -> Result<(), &'static str> {
    if domain.starts_with('[') {
        return Err("domain literals are not accepted");
    }

    let domain = domain.to_lowercase();
    let labels: Vec<&str> = domain.split('.').collect();

    if labels.len() < 2 {
        return Err("domain must contain a top-level domain");
    }
    if labels.iter().any(|label| label.is_empty()) {
        return Err("domain contains an empty label");
    }

    let tld = labels[labels.len() - 1];
    if tld.chars().all(|c| c.is_ascii_digit()) {
        return Err("top-level domain cannot be numeric");
    }
    if SPECIAL_USE_TLDS.contains(&tld) {
        return Err("domain is reserved for special use");
    }

    Ok(())
}

/// Parse `raw` as a UUID v4
fn parse_identifier_v4(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw)
        .ok()
        .filter(|uuid| uuid.get_version() == Some(Version::Random))
}

/// True iff `raw` parses as a UUID carrying version 4.
pub fn is_identifier_v4(raw: &str) -> bool {
    parse_identifier_v4(raw).is_some()
}

/// Return `raw` as a UUID v4, or a freshly generated one when it is not.
///
/// Accepted input comes back in the hyphenated lower-case form Xray expects,
/// so braced, `urn:uuid:` and simple spellings are rewritten.
pub fn ensure_identifier(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => match parse_identifier_v4(raw) {
            Some(uuid) => uuid.hyphenated().to_string(),
            None => {
                let fresh = Uuid::new_v4().to_string();
                tracing::warn!(
                    bad_uuid = %raw,
                    uuid = %fresh,
                    "Bad UUID format, generated a new one"
                );
                fresh
            }
        },
        None => Uuid::new_v4().to_string(),
    }
}

/// `ensure_identifier` under an explicit policy
pub fn resolve_identifier(raw: Option<&str>, policy: IdentifierPolicy) -> UserResult<String> {
    match (raw, policy) {
        (Some(bad), IdentifierPolicy::Reject) if !is_identifier_v4(bad) => {
            Err(UserError::InvalidIdentifier(bad.to_string()))
        }
        _ => Ok(ensure_identifier(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identity_normalizes_case() {
        assert_eq!(
            validate_identity("User@Example.com").unwrap(),
            "user@example.com"
        );
        assert_eq!(
            validate_identity("First.Last+vpn@Mail.Example.ORG").unwrap(),
            "first.last+vpn@mail.example.org"
        );
    }

    #[test]
    fn test_validate_identity_is_idempotent() {
        for raw in ["User@Example.com", "a_b-c@sub.domain.io", "X@Y.DE"] {
            let once = validate_identity(raw).unwrap();
            let twice = validate_identity(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_validate_identity_rejects_malformed() {
        let cases = [
            "BAD EMAIL",
            "",
            "no-at-sign.example.com",
            "@example.com",
            "user@",
            "user@@example.com",
            "us er@example.com",
            "user@exa mple.com",
            "user@localhost",
            "user@printer.local",
            "user@example.test",
            "user@example..com",
            "user@example.com.",
            "user@[127.0.0.1]",
            "user@10.0.0.1",
        ];
        for raw in cases {
            let err = validate_identity(raw).unwrap_err();
            assert!(
                matches!(err, UserError::InvalidIdentity { ref input, .. } if input == raw),
                "expected {raw:?} to be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_is_identifier_v4() {
        assert!(is_identifier_v4("66ad4540-b58c-4ad2-9926-ea63445a9b57"));
        assert!(is_identifier_v4(&Uuid::new_v4().to_string()));
        // version 1 and version 7 are well-formed but not v4
        assert!(!is_identifier_v4("c232ab00-9414-11ec-b3c8-9f6bdeced846"));
        assert!(!is_identifier_v4(&Uuid::now_v7().to_string()));
        assert!(!is_identifier_v4("not-a-uuid"));
        assert!(!is_identifier_v4(""));
    }

    #[test]
    fn test_ensure_identifier_keeps_valid_input() {
        let uuid = "66ad4540-b58c-4ad2-9926-ea63445a9b57";
        assert_eq!(ensure_identifier(Some(uuid)), uuid);
    }

    #[test]
    fn test_ensure_identifier_canonicalizes_spelling() {
        let canonical = "66ad4540-b58c-4ad2-9926-ea63445a9b57";
        for spelling in [
            "urn:uuid:66ad4540-b58c-4ad2-9926-ea63445a9b57",
            "{66ad4540-b58c-4ad2-9926-ea63445a9b57}",
            "66AD4540B58C4AD29926EA63445A9B57",
            "66AD4540-B58C-4AD2-9926-EA63445A9B57",
        ] {
            assert_eq!(ensure_identifier(Some(spelling)), canonical);
        }
    }

    #[test]
    fn test_ensure_identifier_regenerates_invalid_input() {
        for bad in [None, Some("12345"), Some(""), Some("c232ab00-9414-11ec-b3c8-9f6bdeced846")] {
            let uuid = ensure_identifier(bad);
            assert!(is_identifier_v4(&uuid));
            assert_ne!(Some(uuid.as_str()), bad);
        }
    }

    #[test]
    fn test_resolve_identifier_reject_policy() {
        let err = resolve_identifier(Some("12345"), IdentifierPolicy::Reject).unwrap_err();
        assert!(matches!(err, UserError::InvalidIdentifier(ref s) if s == "12345"));

        let generated = resolve_identifier(None, IdentifierPolicy::Reject).unwrap();
        assert!(is_identifier_v4(&generated));
    }

    #[test]
    fn test_resolve_identifier_regenerate_policy() {
        let uuid = resolve_identifier(Some("12345"), IdentifierPolicy::Regenerate).unwrap();
        assert!(is_identifier_v4(&uuid));
    }
}
