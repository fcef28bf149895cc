//! Redaction of credentials and personal data before it reaches the logs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Query-string keys whose values are never logged.
const SENSITIVE_QUERY_KEYS: &[&str] = &["token", "access_token", "password", "secret"];

/// Vetted literal patterns used by [`redact`].
struct Patterns {
    jwt: Regex,
    email: Regex,
    opaque_token: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Patterns {
        jwt: Regex::new(r"\beyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*").unwrap(),
        email: Regex::new(r"\b([A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*(@[A-Za-z0-9.-]+\.[A-Za-z]+)\b")
            .unwrap(),
        opaque_token: Regex::new(r"\b[A-Za-z0-9+/_-]{24,}={0,2}").unwrap(),
    }
});

/// Mask bearer tokens, email addresses and long opaque tokens in free-form text.
///
/// JWTs are replaced whole first so their segments are not matched twice.
/// Emails keep the first character of the local part and the domain.
pub fn redact(input: &str) -> String {
    let p = &*PATTERNS;
    let out = p.jwt.replace_all(input, "[REDACTED_JWT]");
    let out = p.email.replace_all(&out, "$1***$2");
    p.opaque_token
        .replace_all(&out, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Redact a raw query string, dropping values of sensitive keys outright.
pub fn redact_query(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if SENSITIVE_QUERY_KEYS.contains(&key.to_ascii_lowercase().as_str()) => {
                format!("{key}=[REDACTED]")
            }
            _ => redact(pair),
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Display wrapper that redacts on format.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
