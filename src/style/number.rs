//! Formatting of numeric values for tick labels and data-point labels.

/// Notation used when writing a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Notation {
    /// printf `%g`: fixed or scientific, whichever is shorter for the precision
    #[default]
    General,
    /// Fixed number of decimal places
    Fixed,
    /// Mantissa and exponent
    Scientific,
}

/// How a number becomes text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberFormat {
    /// Significant digits for `General`, decimals otherwise
    pub precision: usize,
    pub notation: Notation,
    /// Prefix positive values with `+`
    pub show_pos: bool,
    /// Remove trailing zeros, a bare decimal point and zero exponents
    pub strip_zeros: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            precision: 3,
            notation: Notation::General,
            show_pos: false,
            strip_zeros: true,
        }
    }
}

impl NumberFormat {
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    pub fn show_pos(mut self, show_pos: bool) -> Self {
        self.show_pos = show_pos;
        self
    }

    pub fn strip_zeros(mut self, strip: bool) -> Self {
        self.strip_zeros = strip;
        self
    }

    /// Format a value. Non-finite values are written as `NaN`, `+inf`, `-inf`.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "+inf" } else { "-inf" }.to_string();
        }
        // Avoid "-0"
        let value = if value == 0.0 { 0.0 } else { value };

        let mut text = match self.notation {
            Notation::Fixed => format!("{:.*}", self.precision, value),
            Notation::Scientific => format!("{:.*e}", self.precision, value),
            Notation::General => format_general(value, self.precision.max(1)),
        };

        if self.strip_zeros {
            text = strip_redundant_zeros(&text);
        }
        if self.show_pos && value > 0.0 {
            text.insert(0, '+');
        }
        text
    }
}

/// printf `%g` on `precision` significant digits, exponent written Rust-style (`1.5e4`).
fn format_general(value: f64, precision: usize) -> String {
    // The exponent must be taken after rounding: 999.7 at 3 digits is 1.00e3
    let sci = format!("{:.*e}", precision - 1, value);
    let exponent = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        sci
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}

/// `"2.500"` becomes `"2.5"`, `"3.000"` becomes `"3"`, `"1.50e0"` becomes `"1.5"`.
pub fn strip_redundant_zeros(text: &str) -> String {
    let (mantissa, exponent) = match text.split_once('e') {
        Some((m, e)) => (m, Some(e)),
        None => (text, None),
    };

    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };

    match exponent.map(|e| e.trim_start_matches('+')) {
        Some(e) if e.parse::<i32>().is_ok_and(|v| v != 0) => {
            let value: i32 = e.parse().unwrap_or(0);
            format!("{}e{}", mantissa, value)
        }
        _ => mantissa.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_uses_significant_digits() {
        let f = NumberFormat::default();
        assert_eq!(f.format(2.0), "2");
        assert_eq!(f.format(-0.5), "-0.5");
        assert_eq!(f.format(3.14159), "3.14");
        assert_eq!(f.format(12345.0), "1.23e4");
        assert_eq!(f.format(0.0), "0");
        assert_eq!(f.format(-0.0), "0");
    }

    #[test]
    fn general_switches_exponent_after_rounding() {
        let f = NumberFormat::default();
        assert_eq!(f.format(999.7), "1e3");
        assert_eq!(f.format(0.00001234), "1.23e-5");
    }

    #[test]
    fn fixed_and_scientific() {
        let fixed = NumberFormat::default().notation(Notation::Fixed).precision(2);
        assert_eq!(fixed.format(2.5), "2.5");
        assert_eq!(fixed.strip_zeros(false).format(2.5), "2.50");

        let sci = NumberFormat::default()
            .notation(Notation::Scientific)
            .precision(2)
            .strip_zeros(false);
        assert_eq!(sci.format(1500.0), "1.50e3");
    }

    #[test]
    fn show_pos_only_for_positive() {
        let f = NumberFormat::default().show_pos(true);
        assert_eq!(f.format(4.2), "+4.2");
        assert_eq!(f.format(-4.2), "-4.2");
        assert_eq!(f.format(0.0), "0");
    }

    #[test]
    fn non_finite_values() {
        let f = NumberFormat::default();
        assert_eq!(f.format(f64::NAN), "NaN");
        assert_eq!(f.format(f64::INFINITY), "+inf");
        assert_eq!(f.format(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn strip_handles_integers_and_exponents() {
        assert_eq!(strip_redundant_zeros("100"), "100");
        assert_eq!(strip_redundant_zeros("1.50e0"), "1.5");
        assert_eq!(strip_redundant_zeros("2.000e-3"), "2e-3");
    }
}
