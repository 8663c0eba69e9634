//! Per-field normalization: frequency parsing, token checks, title-casing.

/// Parse a frequency written with `decimal_separator` (e.g. `"5432,1"` with `','`).
///
/// Returns `None` for anything that is not a finite number.
pub fn parse_frequency(raw: &str, decimal_separator: char) -> Option<f64> {
    let raw = raw.trim();
    let value: f64 = if decimal_separator == '.' {
        raw.parse().ok()?
    } else {
        raw.replace(decimal_separator, ".").parse().ok()?
    };
    value.is_finite().then_some(value)
}

/// True if `name` has no whitespace inside it. Expects an already trimmed name.
pub fn is_single_token(name: &str) -> bool {
    !name.chars().any(char::is_whitespace)
}

/// Upper-case the first character of every whitespace-delimited word and
/// lower-case the rest. Whitespace itself is kept as-is.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let mut chars = tail[..end].chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
        rest = &tail[end..];
    }
    out.push_str(rest);
    out
}
