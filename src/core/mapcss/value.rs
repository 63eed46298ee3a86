/// Significant digits used when printing scaled numbers.
const SIGNIFICANT_DIGITS: i32 = 6;

/// Outcome of scaling a raw property value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaledValue {
    /// The value was a number or a `number,number` pair and has been scaled.
    Scaled(String),
    /// The value is an `eval(...)` formula and is never scaled statically.
    Formula(String),
    /// The value could not be read as a number and is kept as written.
    Unparsed { original: String, reason: String },
}

/// Multiply a raw property value by `ratio`.
///
/// Accepts a single number or two numbers separated by the first comma
/// (dash patterns). Formulas and anything that does not parse are returned
/// untouched with the reason attached.
pub fn scale_value(raw: &str, ratio: f64) -> ScaledValue {
    let trimmed = raw.trim();
    if trimmed.contains("eval") {
        return ScaledValue::Formula(raw.to_string());
    }

    let scaled = match trimmed.split_once(',') {
        Some((first, second)) => scale_number(first, ratio).and_then(|first| {
            scale_number(second, ratio).map(|second| format!("{},{}", first, second))
        }),
        None => scale_number(trimmed, ratio),
    };

    match scaled {
        Ok(text) => ScaledValue::Scaled(text),
        Err(reason) => ScaledValue::Unparsed {
            original: raw.to_string(),
            reason,
        },
    }
}

fn scale_number(text: &str, ratio: f64) -> Result<String, String> {
    let text = text.trim();
    let value: f64 = text
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", text, e))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", text));
    }
    Ok(format_number(value * ratio))
}

/// Format a number the way `printf("%g")` does: six significant digits,
/// trailing zeros dropped, scientific notation for very small or large
/// magnitudes.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = (SIGNIFICANT_DIGITS - 1) as usize;
    let scientific = format!("{:.*e}", precision, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &ScaledValue) -> &str {
        match value {
            ScaledValue::Scaled(text) | ScaledValue::Formula(text) => text,
            ScaledValue::Unparsed { original, .. } => original,
        }
    }

    #[test]
    fn scales_single_number() {
        assert_eq!(scale_value(" 2", 2.0), ScaledValue::Scaled("4".to_string()));
        assert_eq!(scale_value("1.5", 3.0), ScaledValue::Scaled("4.5".to_string()));
    }

    #[test]
    fn scales_dash_pair_without_space() {
        assert_eq!(scale_value(" 1,2", 3.0), ScaledValue::Scaled("3,6".to_string()));
        assert_eq!(scale_value("1 , 2 ", 2.0), ScaledValue::Scaled("2,4".to_string()));
    }

    #[test]
    fn longer_dash_lists_are_not_scaled() {
        let value = scale_value(" 1,2,3", 2.0);
        assert!(matches!(value, ScaledValue::Unparsed { .. }));
        assert_eq!(text(&value), " 1,2,3");
    }

    #[test]
    fn formulas_pass_through() {
        let value = scale_value(" eval(prop(\"width\") * 2)", 2.0);
        assert_eq!(
            value,
            ScaledValue::Formula(" eval(prop(\"width\") * 2)".to_string())
        );
    }

    #[test]
    fn named_values_keep_original_text_with_reason() {
        match scale_value(" butt", 2.0) {
            ScaledValue::Unparsed { original, reason } => {
                assert_eq!(original, " butt");
                assert!(reason.contains("butt"));
            }
            other => panic!("expected unparsed value, got {:?}", other),
        }
    }

    #[test]
    fn units_are_not_numbers() {
        assert!(matches!(
            scale_value("2px", 2.0),
            ScaledValue::Unparsed { .. }
        ));
    }

    #[test]
    fn non_finite_spellings_are_unparsed() {
        for raw in [" nan", "inf", " -infinity", "NaN,2"] {
            match scale_value(raw, 2.0) {
                ScaledValue::Unparsed { original, reason } => {
                    assert_eq!(original, raw);
                    assert!(reason.contains("finite"), "{}", reason);
                }
                other => panic!("expected unparsed value for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn empty_value_is_unparsed() {
        assert!(matches!(scale_value("  ", 2.0), ScaledValue::Unparsed { .. }));
    }

    #[test]
    fn negative_offsets_scale() {
        assert_eq!(text(&scale_value("-3", 2.0)), "-6");
    }

    #[test]
    fn format_number_matches_general_notation() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(0.1 * 3.0), "0.3");
        assert_eq!(format_number(4.5), "4.5");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(123456.0), "123456");
        assert_eq!(format_number(1234567.0), "1.23457e+06");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(0.00001), "1e-05");
        assert_eq!(format_number(2.0 / 3.0), "0.666667");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn format_number_rounds_into_next_magnitude() {
        assert_eq!(format_number(999999.5), "1e+06");
        assert_eq!(format_number(9.9999999), "10");
    }

    #[test]
    fn inverse_ratio_restores_value() {
        let ratio = 1.7;
        let scaled = scale_value("3.25", ratio);
        let restored = scale_value(text(&scaled), 1.0 / ratio);
        let restored: f64 = text(&restored).parse().unwrap();
        assert!((restored - 3.25).abs() < 1e-4);
    }
}
