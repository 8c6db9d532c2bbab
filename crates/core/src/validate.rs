//! Email-shape validation for pillbox entries.
//!
//! A single, canonical predicate used wherever an entry is created,
//! ensuring identical classification at widget construction and on every
//! interactive add.
//!
//! The accepted shape approximates RFC 5322 local-part/domain structure:
//!
//! - local part: either a dot-separated sequence of non-empty runs of
//!   characters excluding `< > ( ) [ ] \ . , ; : @ "` and whitespace,
//!   or a quoted string `"…"` with at least one character between the
//!   quotes
//! - domain: either a bracketed dotted quad `[d.d.d.d]` of four 1–3-digit
//!   octets, or one or more `[a-z0-9-]` labels each followed by a dot,
//!   terminated by an all-alphabetic top-level label of length >= 2
//!
//! Matching is **case-insensitive** (input is lowercased first) and never
//! fails: every string classifies deterministically into valid/invalid.

use alloc::string::String;

/// Email-shape predicate.
///
/// Pure function of the input string; no I/O, no state.
///
/// ```
/// use pillbox_core::validate::is_email;
/// assert!(is_email("a@b.com"));
/// assert!(is_email("First.Last@Example.ORG"));
/// assert!(is_email("user@[192.168.0.1]"));
/// assert!(!is_email("not-an-email"));
/// assert!(!is_email("a@b"));
/// ```
pub fn is_email(text: &str) -> bool {
    let lower: String = text.to_lowercase();

    // The domain grammar cannot contain '@', so the separator is always
    // the last '@' in the string (a quoted local part may contain '@').
    let at = match lower.rfind('@') {
        Some(at) => at,
        None => return false,
    };
    let local = &lower[..at];
    let domain = &lower[at + 1..];

    (is_plain_local(local) || is_quoted_local(local))
        && (is_bracketed_quad(domain) || is_dotted_domain(domain))
}

// =========================================================================
// Local part
// =========================================================================

/// Characters that terminate an unquoted local-part run.
fn is_local_special(c: char) -> bool {
    matches!(
        c,
        '<' | '>' | '(' | ')' | '[' | ']' | '\\' | '.' | ',' | ';' | ':' | '@' | '"'
    ) || c.is_whitespace()
}

/// Dot-separated runs of ordinary characters: no empty run, so no leading,
/// trailing, or consecutive dots.
fn is_plain_local(local: &str) -> bool {
    !local.is_empty()
        && local
            .split('.')
            .all(|run| !run.is_empty() && run.chars().all(|c| !is_local_special(c)))
}

/// Quoted string: `"…"` with at least one character between the quotes.
/// Line terminators are excluded from the quoted content.
fn is_quoted_local(local: &str) -> bool {
    local.len() >= 3
        && local.starts_with('"')
        && local.ends_with('"')
        && local[1..local.len() - 1]
            .chars()
            .all(|c| c != '\n' && c != '\r')
}

// =========================================================================
// Domain
// =========================================================================

/// Bracketed dotted quad: `[d.d.d.d]`, each octet 1–3 digits.
///
/// Only the digit count is checked, not the 0–255 range.
fn is_bracketed_quad(domain: &str) -> bool {
    let inner = match domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        Some(inner) => inner,
        None => return false,
    };

    let mut octets = 0usize;
    for part in inner.split('.') {
        octets += 1;
        if part.is_empty() || part.len() > 3 || !part.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
    }
    octets == 4
}

/// Dotted name: one or more `[a-z0-9-]` labels each followed by a dot,
/// then an all-alphabetic top-level label of length >= 2.
fn is_dotted_domain(domain: &str) -> bool {
    let (labels, top) = match domain.rsplit_once('.') {
        Some(split) => split,
        None => return false,
    };

    if top.len() < 2 || !top.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    !labels.is_empty()
        && labels.split('.').all(|label| {
            !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ----- Accepted shapes ------------------------------------------------

    #[test]
    fn plain_local_dotted_domain() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last@example.org"));
        assert!(is_email("user+tag@mail.example.co"));
        assert!(is_email("o'brien@irish.ie"));
    }

    #[test]
    fn case_insensitive() {
        assert!(is_email("First.Last@Example.ORG"));
        assert!(is_email("A@B.COM"));
    }

    #[test]
    fn multi_label_domain() {
        assert!(is_email("a@b.co.uk"));
        assert!(is_email("a@sub-domain.example.com"));
        assert!(is_email("a@0.example.com"));
    }

    #[test]
    fn quoted_local() {
        assert!(is_email("\"john doe\"@b.com"));
        assert!(is_email("\"a@b\"@c.com"));
        assert!(is_email("\"x\"@b.com"));
    }

    #[test]
    fn bracketed_quad_domain() {
        assert!(is_email("user@[192.168.0.1]"));
        assert!(is_email("user@[1.2.3.4]"));
        // Digit count only; the range is not checked.
        assert!(is_email("user@[999.999.999.999]"));
    }

    // ----- Rejected shapes ------------------------------------------------

    #[test]
    fn missing_at_or_domain() {
        assert!(!is_email("not-an-email"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a@"));
        assert!(!is_email("@b.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn bad_local_dots() {
        assert!(!is_email(".a@b.com"));
        assert!(!is_email("a.@b.com"));
        assert!(!is_email("a..b@b.com"));
    }

    #[test]
    fn local_special_characters() {
        assert!(!is_email("a b@b.com"));
        assert!(!is_email("a,b@b.com"));
        assert!(!is_email("a(b)@b.com"));
        assert!(!is_email("a@b@c.com"));
        assert!(!is_email("a\"b@c.com"));
    }

    #[test]
    fn bad_quoted_local() {
        assert!(!is_email("\"\"@b.com"));
        assert!(!is_email("\"x@b.com"));
        assert!(!is_email("\"x\"y@b.com"));
        assert!(!is_email("\"a\nb\"@c.com"));
    }

    #[test]
    fn bad_top_level_label() {
        assert!(!is_email("a@b.c"));
        assert!(!is_email("a@b.c0m"));
        assert!(!is_email("a@b.com1"));
    }

    #[test]
    fn bad_domain_dots() {
        assert!(!is_email("a@.com"));
        assert!(!is_email("a@b..com"));
        assert!(!is_email("a@b.com."));
        assert!(!is_email("a@b_c.com"));
    }

    #[test]
    fn bad_bracketed_quad() {
        assert!(!is_email("user@[1.2.3]"));
        assert!(!is_email("user@[1.2.3.4.5]"));
        assert!(!is_email("user@[1234.2.3.4]"));
        assert!(!is_email("user@[1.2.3.a]"));
        assert!(!is_email("user@[1.2.3.4"));
    }

    #[test]
    fn untrimmed_input_is_invalid() {
        // Trimming is the caller's concern; whitespace is a local-part
        // special character here.
        assert!(!is_email(" a@b.com"));
        assert!(!is_email("a@b.com "));
    }
}
