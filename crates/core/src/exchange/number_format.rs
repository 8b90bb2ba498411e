//! Locale digit grouping for fixed-point amount strings.

use fxline_shared::DisplayConfig;

/// Separators used when showing amounts to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Inserted between integer digit groups.
    pub grouping_separator: String,
    /// Replaces the `.` between integer and fractional digits.
    pub decimal_separator: String,
    /// Digits per group. Zero disables grouping.
    pub grouping_size: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            grouping_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            grouping_size: 3,
        }
    }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

impl NumberFormat {
    /// Builds the format from display configuration.
    #[must_use]
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            grouping_separator: config.grouping_separator.clone(),
            decimal_separator: config.decimal_separator.clone(),
            grouping_size: config.grouping_size,
        }
    }

    /// Groups the integer digits of a plain decimal string.
    ///
    /// Every fractional digit is kept, so a fixed-point string keeps its
    /// precision. Input that is not a plain decimal is returned unchanged.
    #[must_use]
    pub fn format_number(&self, value: &str) -> String {
        let trimmed = value.trim();
        let (sign, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", trimmed),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        if integer.is_empty() || !is_digits(integer) || !fraction.is_none_or(is_digits) {
            return value.to_string();
        }

        let mut out = String::with_capacity(value.len() + integer.len() / 2);
        out.push_str(sign);
        out.push_str(&self.group_integer(integer));
        if let Some(fraction) = fraction {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    fn group_integer(&self, digits: &str) -> String {
        if self.grouping_size == 0 || self.grouping_separator.is_empty() {
            return digits.to_string();
        }

        let len = digits.len();
        let mut out = String::with_capacity(len + len / self.grouping_size);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (len - i) % self.grouping_size == 0 {
                out.push_str(&self.grouping_separator);
            }
            out.push(digit);
        }
        out
    }
}
