//! Entry colors end up inside a stylesheet, so only plain color syntax is
//! let through: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
//! `rgba(r, g, b, a)` with numeric arguments.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("empty color")]
    Empty,

    #[error("color '{value}' contains '{token}'")]
    Injection { value: String, token: String },

    #[error("hex color '{0}' must have 3, 4, 6 or 8 hex digits")]
    BadHex(String),

    #[error("'{0}' is not a valid rgb()/rgba() color")]
    BadFunction(String),

    #[error("unsupported color '{0}': only hex and rgb()/rgba() are allowed")]
    Unsupported(String),
}

/// Validate a color for use in a generated CSS rule.
pub fn validate_color(value: &str) -> Result<(), ColorError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Empty);
    }

    check_injection(trimmed)?;

    if let Some(hex) = trimmed.strip_prefix('#') {
        let ok = matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
        return if ok {
            Ok(())
        } else {
            Err(ColorError::BadHex(trimmed.to_string()))
        };
    }

    if trimmed.starts_with("rgb(") || trimmed.starts_with("rgba(") {
        return validate_rgb_function(trimmed);
    }

    Err(ColorError::Unsupported(trimmed.to_string()))
}

fn check_injection(value: &str) -> Result<(), ColorError> {
    let lower = value.to_lowercase();
    let blocked = |token: &str| ColorError::Injection {
        value: value.to_string(),
        token: token.to_string(),
    };

    for token in ["expression(", "url(", "javascript:", "@import", "\\"] {
        if lower.contains(token) {
            return Err(blocked(token));
        }
    }
    for ch in [';', '{', '}', '<', '>'] {
        if value.contains(ch) {
            return Err(blocked(&ch.to_string()));
        }
    }
    Ok(())
}

fn validate_rgb_function(value: &str) -> Result<(), ColorError> {
    let bad = || ColorError::BadFunction(value.to_string());
    let (inner, expected) = if let Some(rest) = value.strip_prefix("rgba(") {
        (rest, 4)
    } else {
        (value.strip_prefix("rgb(").ok_or_else(bad)?, 3)
    };
    let inner = inner.strip_suffix(')').ok_or_else(bad)?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != expected || parts.iter().any(|p| p.parse::<f64>().is_err()) {
        return Err(bad());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        for ok in ["#fff", "#fffa", "#dd0000", "#00d4ff80"] {
            assert!(validate_color(ok).is_ok(), "{ok}");
        }
        for bad in ["#ff", "#fffff", "#gggggg"] {
            assert!(matches!(validate_color(bad), Err(ColorError::BadHex(_))), "{bad}");
        }
    }

    #[test]
    fn rgb_functions() {
        assert!(validate_color("rgb(255, 0, 0)").is_ok());
        assert!(validate_color("rgba(0,0,0,0.5)").is_ok());
        assert!(validate_color("rgba(0, 0, 0)").is_err());
        assert!(validate_color("rgb(red, 0, 0)").is_err());
        assert!(validate_color("rgb(1, 2, 3").is_err());
    }

    #[test]
    fn rejects_injection() {
        assert!(matches!(
            validate_color("#fff} body {display:none"),
            Err(ColorError::Injection { .. })
        ));
        assert!(validate_color("red; background: url(evil)").is_err());
        assert!(validate_color("expression(alert(1))").is_err());
    }

    #[test]
    fn rejects_named_and_empty() {
        assert!(matches!(validate_color("red"), Err(ColorError::Unsupported(_))));
        assert_eq!(validate_color("  "), Err(ColorError::Empty));
    }
}
