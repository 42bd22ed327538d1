use serde_json::Value;

/// Parses numbers and numeric strings. Thousands separators and surrounding
/// whitespace are tolerated; anything non-finite is rejected.
pub(crate) fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let cleaned: String = text
                .trim()
                .chars()
                .filter(|ch| *ch != ',' && *ch != '_')
                .collect();
            if cleaned.is_empty() {
                None
            } else {
                cleaned.parse::<f64>().ok()
            }
        }
        _ => None,
    };

    parsed.filter(|number| number.is_finite())
}

/// Non-negative whole count. Fractions truncate and negatives floor at zero.
pub(crate) fn count(value: &Value) -> Option<u32> {
    if let Some(exact) = value.as_u64() {
        return Some(u32::try_from(exact).unwrap_or(u32::MAX));
    }

    number(value).map(|number| {
        if number <= 0.0 {
            0
        } else if number >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            number.trunc() as u32
        }
    })
}

pub(crate) fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_f64().map(|number| number != 0.0),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Whether a link-like field carries anything a customer could follow.
pub(crate) fn link_present(value: &Value) -> bool {
    match value {
        Value::String(text) => !text.trim().is_empty(),
        Value::Bool(flag) => *flag,
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Number(_) | Value::Null => false,
    }
}
