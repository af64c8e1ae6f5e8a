//! Numeric display formatting and keystroke admission for number cells.
//!
//! Formatting runs in two passes: an optional live pass on every keystroke that regroups the
//! integer part while keeping what the user typed, and a strict pass on blur that enforces the
//! configured decimal places. Cursor placement after a live pass is best effort.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sizing::ColumnAlign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Built-in number formats.
pub enum NumberFormatPreset {
    /// Two fixed decimals, formatted while typing.
    Currency,
    /// Up to two decimals, trailing zeros trimmed.
    Percentage,
    /// Up to two decimals, trailing zeros trimmed.
    Decimal,
    /// Whole numbers, formatted while typing.
    Integer,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown number format preset `{0}`")]
/// Raised when a preset name is not recognized.
pub struct UnknownPresetError(pub String);

impl FromStr for NumberFormatPreset {
    type Err = UnknownPresetError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "currency" => Ok(Self::Currency),
            "percentage" | "percent" => Ok(Self::Percentage),
            "decimal" => Ok(Self::Decimal),
            "integer" => Ok(Self::Integer),
            _ => Err(UnknownPresetError(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Number display rules for one column.
pub struct NumberFormat {
    /// Decimal places enforced on blur (an upper bound when trimming).
    pub decimals: u8,
    /// Grouping character inserted every three integer digits.
    pub thousands_separator: char,
    /// Character separating integer and fractional digits.
    pub decimal_separator: char,
    /// Input text alignment.
    pub align: ColumnAlign,
    /// Regroup digits on every keystroke instead of only on blur.
    pub format_on_type: bool,
    /// Drop trailing fractional zeros after the strict pass.
    pub trim_trailing_zeros: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::preset(NumberFormatPreset::Decimal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Display text and cursor offset after a live formatting pass.
pub struct LiveFormat {
    /// Formatted input text.
    pub text: String,
    /// Cursor offset in characters.
    pub cursor: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Modifier keys held during a keystroke.
pub struct KeyModifiers {
    /// Control key.
    pub ctrl: bool,
    /// Command/meta key.
    pub meta: bool,
    /// Alt/option key.
    pub alt: bool,
    /// Shift key.
    pub shift: bool,
}

const CONTROL_KEYS: [&str; 11] = [
    "Backspace",
    "Delete",
    "Tab",
    "Escape",
    "Enter",
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "ArrowDown",
    "Home",
    "End",
];

const SHORTCUT_KEYS: [&str; 5] = ["a", "c", "v", "x", "z"];

struct NumberParts {
    negative: bool,
    integer: String,
    fraction: Option<String>,
}

impl NumberFormat {
    /// Rules for a built-in preset.
    pub fn preset(preset: NumberFormatPreset) -> Self {
        match preset {
            NumberFormatPreset::Currency => Self {
                decimals: 2,
                thousands_separator: ',',
                decimal_separator: '.',
                align: ColumnAlign::Right,
                format_on_type: true,
                trim_trailing_zeros: false,
            },
            NumberFormatPreset::Percentage => Self {
                decimals: 2,
                thousands_separator: ',',
                decimal_separator: '.',
                align: ColumnAlign::Right,
                format_on_type: false,
                trim_trailing_zeros: true,
            },
            NumberFormatPreset::Decimal => Self {
                decimals: 2,
                thousands_separator: ',',
                decimal_separator: '.',
                align: ColumnAlign::Right,
                format_on_type: false,
                trim_trailing_zeros: true,
            },
            NumberFormatPreset::Integer => Self {
                decimals: 0,
                thousands_separator: ',',
                decimal_separator: '.',
                align: ColumnAlign::Right,
                format_on_type: true,
                trim_trailing_zeros: false,
            },
        }
    }

    /// Regroups `raw` while the user types and shifts `cursor` by the length change.
    ///
    /// Returns the input untouched when live formatting is off.
    pub fn format_live(&self, raw: &str, cursor: usize) -> LiveFormat {
        let raw_len = raw.chars().count();
        if !self.format_on_type {
            return LiveFormat {
                text: raw.to_string(),
                cursor: cursor.min(raw_len),
            };
        }

        let parts = self.split(raw);
        let mut text = String::new();
        if parts.negative {
            text.push('-');
        }
        let integer = trim_leading_zeros(&parts.integer);
        match (&parts.fraction, integer.is_empty()) {
            (Some(_), true) => text.push('0'),
            (None, true) => {}
            (_, false) => text.push_str(&self.group(&integer)),
        }
        if let Some(fraction) = parts.fraction.as_ref().filter(|_| self.decimals > 0) {
            text.push(self.decimal_separator);
            text.extend(fraction.chars().take(usize::from(self.decimals)));
        }

        let text_len = text.chars().count() as isize;
        let shifted = cursor as isize + (text_len - raw_len as isize);
        LiveFormat {
            cursor: shifted.clamp(0, text_len) as usize,
            text,
        }
    }

    /// Final blur pass: rounds to exact decimal places, then trims when configured.
    ///
    /// Unparseable input formats as the empty string.
    pub fn format_strict(&self, raw: &str) -> String {
        match self.parse(raw) {
            Some(value) => self.format_value(value),
            None => String::new(),
        }
    }

    /// Formats a stored number for display.
    pub fn format_value(&self, value: f64) -> String {
        if !value.is_finite() {
            return String::new();
        }
        let fixed = format!("{:.*}", usize::from(self.decimals), value.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
            None => (fixed, String::new()),
        };
        let fraction = if self.trim_trailing_zeros {
            fraction.trim_end_matches('0').to_string()
        } else {
            fraction
        };
        let is_zero = integer.chars().chain(fraction.chars()).all(|ch| ch == '0');

        let mut text = String::new();
        if value < 0.0 && !is_zero {
            text.push('-');
        }
        text.push_str(&self.group(&integer));
        if !fraction.is_empty() {
            text.push(self.decimal_separator);
            text.push_str(&fraction);
        }
        text
    }

    /// Parses formatted or raw text into a number.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let parts = self.split(text);
        let fraction = parts.fraction.unwrap_or_default();
        if parts.integer.is_empty() && fraction.is_empty() {
            return None;
        }
        let integer = if parts.integer.is_empty() {
            "0"
        } else {
            parts.integer.as_str()
        };
        let sign = if parts.negative { "-" } else { "" };
        let normalized = if fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer}.{fraction}")
        };
        normalized.parse::<f64>().ok()
    }

    /// Whether `text` holds a number written with this format's characters and nothing else.
    pub fn is_numeric_text(&self, text: &str) -> bool {
        let body = text.trim();
        body.chars().all(|ch| {
            ch.is_ascii_digit()
                || ch == '-'
                || ch == self.decimal_separator
                || ch == self.thousands_separator
        }) && self.parse(body).is_some()
    }

    /// Whether a keystroke may reach the input while this format is active.
    ///
    /// `text` is the current input text and `cursor` the caret offset before the key lands.
    pub fn admits_key(
        &self,
        key: &str,
        text: &str,
        cursor: usize,
        modifiers: KeyModifiers,
    ) -> bool {
        if modifiers.ctrl || modifiers.meta {
            return SHORTCUT_KEYS
                .iter()
                .any(|shortcut| shortcut.eq_ignore_ascii_case(key));
        }
        if CONTROL_KEYS.contains(&key) {
            return true;
        }

        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return false;
        };

        if ch.is_ascii_digit() {
            true
        } else if ch == self.decimal_separator {
            self.decimals > 0 && !text.contains(self.decimal_separator)
        } else if ch == '-' {
            cursor == 0 && !text.contains('-')
        } else {
            ch == self.thousands_separator
        }
    }

    fn split(&self, raw: &str) -> NumberParts {
        let mut parts = NumberParts {
            negative: false,
            integer: String::new(),
            fraction: None,
        };
        let mut seen_content = false;
        for ch in raw.chars() {
            if ch == '-' && !seen_content && !parts.negative {
                parts.negative = true;
                continue;
            }
            if ch.is_ascii_digit() {
                seen_content = true;
                match parts.fraction.as_mut() {
                    Some(fraction) => fraction.push(ch),
                    None => parts.integer.push(ch),
                }
            } else if ch == self.decimal_separator && parts.fraction.is_none() {
                seen_content = true;
                parts.fraction = Some(String::new());
            }
        }
        parts
    }

    fn group(&self, integer: &str) -> String {
        let digits: Vec<char> = integer.chars().collect();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, digit) in digits.iter().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(*digit);
        }
        grouped
    }
}

fn trim_leading_zeros(integer: &str) -> String {
    let trimmed = integer.trim_start_matches('0');
    if trimmed.is_empty() && !integer.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn currency() -> NumberFormat {
        NumberFormat::preset(NumberFormatPreset::Currency)
    }

    #[test]
    fn live_pass_groups_integer_and_moves_cursor() {
        let live = currency().format_live("1234567", 7);
        assert_eq!(live.text, "1,234,567");
        assert_eq!(live.cursor, 9);

        let edited = currency().format_live("1,2345", 6);
        assert_eq!(edited.text, "12,345");
        assert_eq!(edited.cursor, 6);
    }

    #[test]
    fn live_pass_keeps_partial_decimals_and_caps_places() {
        let format = currency();
        assert_eq!(format.format_live("1234.", 5).text, "1,234.");
        assert_eq!(format.format_live("1234.567", 8).text, "1,234.56");
        assert_eq!(format.format_live(".5", 2).text, "0.5");
        assert_eq!(format.format_live("-", 1).text, "-");
        assert_eq!(format.format_live("007", 3).text, "7");
    }

    #[test]
    fn live_pass_is_inert_when_disabled() {
        let format = NumberFormat::preset(NumberFormatPreset::Decimal);
        let live = format.format_live("1234.5", 6);
        assert_eq!(live.text, "1234.5");
        assert_eq!(live.cursor, 6);
    }

    #[test]
    fn separator_typed_before_digits_stays_in_bounds() {
        let live = currency().format_live(",", 1);
        assert_eq!(live.text, "");
        assert_eq!(live.cursor, 0);
    }

    #[test]
    fn strict_pass_enforces_decimal_places() {
        assert_eq!(currency().format_strict("1234.5"), "1,234.50");
        assert_eq!(currency().format_strict("1,234.568"), "1,234.57");
        assert_eq!(currency().format_strict("-0.001"), "0.00");
        assert_eq!(currency().format_strict("-12"), "-12.00");
        assert_eq!(currency().format_strict(""), "");
    }

    #[test]
    fn strict_pass_trims_when_configured() {
        let decimal = NumberFormat::preset(NumberFormatPreset::Decimal);
        assert_eq!(decimal.format_strict("12.50"), "12.5");
        assert_eq!(decimal.format_strict("12.001"), "12");
        let integer = NumberFormat::preset(NumberFormatPreset::Integer);
        assert_eq!(integer.format_strict("1234.6"), "1,235");
    }

    #[test]
    fn custom_separators_round_trip_through_parse() {
        let format = NumberFormat {
            thousands_separator: '.',
            decimal_separator: ',',
            ..currency()
        };
        assert_eq!(format.format_value(1234.5), "1.234,50");
        assert_eq!(format.parse("1.234,50"), Some(1234.5));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(currency().parse(""), None);
        assert_eq!(currency().parse("-"), None);
        assert_eq!(currency().parse("-1,000.25"), Some(-1000.25));
    }

    #[test]
    fn key_admission_filters_input() {
        let format = currency();
        let none = KeyModifiers::default();
        assert!(format.admits_key("7", "12", 2, none));
        assert!(format.admits_key(".", "12", 2, none));
        assert!(!format.admits_key(".", "12.5", 4, none));
        assert!(format.admits_key("-", "12", 0, none));
        assert!(!format.admits_key("-", "12", 1, none));
        assert!(!format.admits_key("-", "-12", 0, none));
        assert!(format.admits_key(",", "12", 2, none));
        assert!(!format.admits_key("e", "12", 2, none));
        assert!(format.admits_key("Backspace", "12", 2, none));
        assert!(format.admits_key("ArrowLeft", "12", 2, none));

        let ctrl = KeyModifiers {
            ctrl: true,
            ..KeyModifiers::default()
        };
        assert!(format.admits_key("v", "12", 2, ctrl));
        assert!(format.admits_key("A", "12", 2, ctrl));
        assert!(!format.admits_key("p", "12", 2, ctrl));
    }

    #[test]
    fn integer_format_rejects_decimal_separator() {
        let integer = NumberFormat::preset(NumberFormatPreset::Integer);
        assert!(!integer.admits_key(".", "12", 2, KeyModifiers::default()));
    }

    #[test]
    fn numeric_text_excludes_words_with_digits() {
        let format = currency();
        assert!(format.is_numeric_text(" 1,234.5 "));
        assert!(format.is_numeric_text("-12"));
        assert!(!format.is_numeric_text("Room 12"));
        assert!(!format.is_numeric_text(""));
    }

    #[test]
    fn presets_parse_from_names() {
        assert_eq!(
            "Currency".parse::<NumberFormatPreset>(),
            Ok(NumberFormatPreset::Currency)
        );
        assert_eq!(
            "bogus".parse::<NumberFormatPreset>(),
            Err(UnknownPresetError("bogus".to_string()))
        );
    }
}
