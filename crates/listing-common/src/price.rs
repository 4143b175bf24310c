use serde_json::Value;

/// Parse a raw price value into a numeric nightly price.
///
/// Finite numbers are used as-is. Strings are stripped to digits and `.`
/// before parsing, so `"$1,200/night"` becomes `1200` — but `"1.2.3"` style
/// garbage still fails. Anything else is `None`.
pub fn parse_price(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Choose the display text for a price.
///
/// A non-empty raw string wins verbatim (trimmed) so source formatting like
/// `"€95"` or `"$120/night"` survives. Otherwise a parsed numeric value is
/// synthesized as `"$<rounded> / night"`.
pub fn format_price(raw: Option<&Value>, numeric: Option<f64>) -> Option<String> {
    if let Some(Value::String(s)) = raw {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }
    numeric.map(|n| format!("${} / night", n.round()))
}
