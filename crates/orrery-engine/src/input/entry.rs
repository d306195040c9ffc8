/// Parse a number typed into a text field.
/// Empty, non-numeric and non-finite text is rejected; the caller then
/// keeps (and redisplays) its last valid value.
pub fn parse_entry(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_numbers() {
        assert_eq!(parse_entry("42"), Some(42.0));
        assert_eq!(parse_entry("  -3.5 "), Some(-3.5));
        assert_eq!(parse_entry("1e3"), Some(1000.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_entry(""), None);
        assert_eq!(parse_entry("   "), None);
        assert_eq!(parse_entry("fast"), None);
        assert_eq!(parse_entry("12 days"), None);
        assert_eq!(parse_entry("NaN"), None);
        assert_eq!(parse_entry("inf"), None);
    }
}
