//! Per-cell edit sessions implementing the live-update / commit contract.
//!
//! Text and number cells report every keystroke as [`CellSignal::Changed`] and commit the current
//! value on blur or Enter, whether or not it changed. Select and datepicker cells have no typing
//! phase: each distinct selection reports a change followed by a commit, and reselecting the
//! current value reports nothing.

use serde_json::{Number, Value};

use crate::model::value_text;
use crate::number_format::{KeyModifiers, LiveFormat, NumberFormat};

#[derive(Debug, Clone, PartialEq)]
/// Notification raised by an edit session for the table to act on.
pub enum CellSignal {
    /// Live value changed; write it into the row and emit `CellEdited`.
    Changed(Value),
    /// Value is final for this edit session; emit `CellCommitted`.
    Committed(Value),
}

#[derive(Debug, Clone, PartialEq)]
/// Edit state of a text cell.
///
/// A text cell given a [`NumberFormat`] formats its text like a number cell but keeps reporting
/// strings.
pub struct TextCellSession {
    value: Value,
    format: Option<NumberFormat>,
    focused: bool,
}

impl TextCellSession {
    /// Starts a session showing `initial`.
    pub fn new(initial: impl Into<Value>) -> Self {
        Self {
            value: initial.into(),
            format: None,
            focused: false,
        }
    }

    /// Formats the text as a number with `format`, starting from its strict form.
    pub fn with_format(mut self, format: Option<NumberFormat>) -> Self {
        self.format = format;
        self.value = self.strict(self.value.clone());
        self
    }

    /// Live value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Active number format.
    pub fn format(&self) -> Option<&NumberFormat> {
        self.format.as_ref()
    }

    /// Whether the input currently has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Input gained focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// A keystroke replaced the input value.
    pub fn input(&mut self, value: impl Into<Value>) -> CellSignal {
        self.value = value.into();
        CellSignal::Changed(self.value.clone())
    }

    /// A keystroke replaced the input text; `cursor` is the caret offset after the edit.
    ///
    /// Applies the live formatting pass when a format is set.
    pub fn input_at(&mut self, raw: &str, cursor: usize) -> (LiveFormat, CellSignal) {
        let live = live_format(raw, cursor, self.format.as_ref());
        let signal = self.input(live.text.clone());
        (live, signal)
    }

    /// Whether `key` may reach the input; unformatted text admits everything.
    pub fn admits_key(&self, key: &str, cursor: usize, modifiers: KeyModifiers) -> bool {
        match self.format.as_ref() {
            Some(format) => format.admits_key(key, &value_text(&self.value), cursor, modifiers),
            None => true,
        }
    }

    /// Input lost focus; always commits.
    pub fn blur(&mut self) -> CellSignal {
        self.focused = false;
        self.commit()
    }

    /// A key was pressed; Enter commits without leaving the input.
    pub fn key(&mut self, key: &str) -> Option<CellSignal> {
        (key == "Enter").then(|| self.commit())
    }

    /// Adopts a value fed back by the host; ignored while the user is typing.
    pub fn sync(&mut self, external: Value) {
        if !self.focused {
            self.value = self.strict(external);
        }
    }

    fn commit(&mut self) -> CellSignal {
        self.value = self.strict(self.value.clone());
        CellSignal::Committed(self.value.clone())
    }

    // Text that does not parse as a number is left as typed.
    fn strict(&self, value: Value) -> Value {
        if let (Some(format), Value::String(text)) = (self.format.as_ref(), &value) {
            if format.is_numeric_text(text) {
                return Value::String(format.format_strict(text));
            }
        }
        value
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Edit state of a number cell: the displayed text plus the numeric value it reports.
pub struct NumberCellSession {
    text: String,
    value: Option<f64>,
    format: Option<NumberFormat>,
    focused: bool,
}

impl NumberCellSession {
    /// Starts a session showing `initial` formatted with `format`.
    pub fn new(initial: Option<f64>, format: Option<NumberFormat>) -> Self {
        Self {
            text: display_text(initial, format.as_ref()),
            value: initial,
            format,
            focused: false,
        }
    }

    /// Displayed input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Numeric value, `None` when the input is blank or unparseable.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Active number format.
    pub fn format(&self) -> Option<&NumberFormat> {
        self.format.as_ref()
    }

    /// Input gained focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// A keystroke replaced the input text; `cursor` is the caret offset after the edit.
    ///
    /// Returns the text and caret to display plus the change signal.
    pub fn input(&mut self, raw: &str, cursor: usize) -> (LiveFormat, CellSignal) {
        let live = live_format(raw, cursor, self.format.as_ref());
        self.text = live.text.clone();
        self.value = parse_number(&self.text, self.format.as_ref());
        (live, CellSignal::Changed(number_to_value(self.value)))
    }

    /// Whether `key` may reach the input; unformatted numbers admit everything.
    pub fn admits_key(&self, key: &str, cursor: usize, modifiers: KeyModifiers) -> bool {
        match self.format.as_ref() {
            Some(format) => format.admits_key(key, &self.text, cursor, modifiers),
            None => true,
        }
    }

    /// Input lost focus: applies the strict formatting pass and commits.
    pub fn blur(&mut self) -> CellSignal {
        self.focused = false;
        self.commit()
    }

    /// A key was pressed; Enter commits the strict value without leaving the input.
    pub fn key(&mut self, key: &str) -> Option<CellSignal> {
        (key == "Enter").then(|| self.commit())
    }

    /// Adopts a value fed back by the host; ignored while the user is typing.
    pub fn sync(&mut self, external: Option<f64>) {
        if !self.focused && external != self.value {
            self.value = external;
            self.text = display_text(external, self.format.as_ref());
        }
    }

    fn commit(&mut self) -> CellSignal {
        self.text = match self.format.as_ref() {
            Some(format) => format.format_strict(&self.text),
            None => self.text.trim().to_string(),
        };
        self.value = parse_number(&self.text, self.format.as_ref());
        CellSignal::Committed(number_to_value(self.value))
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Edit state of a select or datepicker cell.
pub struct DiscreteCellSession {
    value: Value,
}

impl DiscreteCellSession {
    /// Starts a session with `initial` selected.
    pub fn new(initial: impl Into<Value>) -> Self {
        Self {
            value: initial.into(),
        }
    }

    /// Selected value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// A value was picked. Emits change then commit, or nothing when it equals the previous value.
    pub fn select(&mut self, value: impl Into<Value>) -> Vec<CellSignal> {
        let value = value.into();
        if value == self.value {
            return Vec::new();
        }
        self.value = value;
        vec![
            CellSignal::Changed(self.value.clone()),
            CellSignal::Committed(self.value.clone()),
        ]
    }

    /// Adopts a value fed back by the host.
    pub fn sync(&mut self, external: Value) {
        self.value = external;
    }
}

fn live_format(raw: &str, cursor: usize, format: Option<&NumberFormat>) -> LiveFormat {
    match format {
        Some(format) => format.format_live(raw, cursor),
        None => LiveFormat {
            text: raw.to_string(),
            cursor,
        },
    }
}

fn display_text(value: Option<f64>, format: Option<&NumberFormat>) -> String {
    match (value, format) {
        (Some(value), Some(format)) => format.format_value(value),
        (Some(value), None) => value.to_string(),
        (None, _) => String::new(),
    }
}

fn parse_number(text: &str, format: Option<&NumberFormat>) -> Option<f64> {
    match format {
        Some(format) => format.parse(text),
        None => text.trim().parse::<f64>().ok(),
    }
}

fn number_to_value(value: Option<f64>) -> Value {
    value
        .and_then(|value| {
            if value.fract() == 0.0 && value.abs() < 9.0e15 {
                Some(Value::Number(Number::from(value as i64)))
            } else {
                Number::from_f64(value).map(Value::Number)
            }
        })
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::number_format::NumberFormatPreset;

    #[test]
    fn text_session_changes_per_keystroke_then_commits_final_value() {
        let mut session = TextCellSession::new("");
        session.focus();
        let mut signals = Vec::new();
        for text in ["W", "Wi", "Wid"] {
            signals.push(session.input(text));
        }
        signals.push(session.blur());
        assert_eq!(
            signals,
            vec![
                CellSignal::Changed(json!("W")),
                CellSignal::Changed(json!("Wi")),
                CellSignal::Changed(json!("Wid")),
                CellSignal::Committed(json!("Wid")),
            ]
        );
    }

    #[test]
    fn text_session_commits_on_every_blur_and_enter() {
        let mut session = TextCellSession::new("same");
        assert_eq!(session.blur(), CellSignal::Committed(json!("same")));
        assert_eq!(session.blur(), CellSignal::Committed(json!("same")));
        assert_eq!(
            session.key("Enter"),
            Some(CellSignal::Committed(json!("same")))
        );
        assert_eq!(session.key("a"), None);
    }

    #[test]
    fn text_session_ignores_host_sync_while_focused() {
        let mut session = TextCellSession::new("draft");
        session.focus();
        session.sync(json!("server"));
        assert_eq!(session.value(), &json!("draft"));
        session.blur();
        session.sync(json!("server"));
        assert_eq!(session.value(), &json!("server"));
    }

    #[test]
    fn number_session_formats_live_and_strictly_on_blur() {
        let format = NumberFormat::preset(NumberFormatPreset::Currency);
        let mut session = NumberCellSession::new(None, Some(format));
        session.focus();

        let (live, signal) = session.input("12345", 5);
        assert_eq!(live.text, "12,345");
        assert_eq!(live.cursor, 6);
        assert_eq!(signal, CellSignal::Changed(json!(12345)));

        let (_, signal) = session.input("12,345.5", 8);
        assert_eq!(signal, CellSignal::Changed(json!(12345.5)));

        assert_eq!(session.blur(), CellSignal::Committed(json!(12345.5)));
        assert_eq!(session.text(), "12,345.50");
    }

    #[test]
    fn number_session_reports_blank_as_null() {
        let mut session = NumberCellSession::new(Some(4.0), None);
        assert_eq!(session.text(), "4");
        let (_, signal) = session.input("", 0);
        assert_eq!(signal, CellSignal::Changed(Value::Null));
        assert_eq!(session.blur(), CellSignal::Committed(Value::Null));
    }

    #[test]
    fn number_session_commits_the_same_value_on_enter_and_blur() {
        let format = NumberFormat::preset(NumberFormatPreset::Decimal);
        let mut session = NumberCellSession::new(None, Some(format));
        session.focus();
        session.input("12.345", 6);

        assert_eq!(session.key("Enter"), Some(CellSignal::Committed(json!(12.35))));
        assert_eq!(session.text(), "12.35");
        assert_eq!(session.blur(), CellSignal::Committed(json!(12.35)));
    }

    #[test]
    fn formatted_text_session_reports_formatted_strings() {
        let format = NumberFormat::preset(NumberFormatPreset::Currency);
        let mut session = TextCellSession::new("1234.5").with_format(Some(format));
        assert_eq!(session.value(), &json!("1,234.50"));
        session.focus();

        let (live, signal) = session.input_at("98765", 5);
        assert_eq!(live.text, "98,765");
        assert_eq!(live.cursor, 6);
        assert_eq!(signal, CellSignal::Changed(json!("98,765")));

        assert_eq!(
            session.key("Enter"),
            Some(CellSignal::Committed(json!("98,765.00")))
        );
        assert_eq!(session.blur(), CellSignal::Committed(json!("98,765.00")));
    }

    #[test]
    fn formatted_text_session_filters_keys_and_keeps_words() {
        let format = NumberFormat::preset(NumberFormatPreset::Integer);
        let mut session = TextCellSession::new("").with_format(Some(format));
        let none = KeyModifiers::default();
        assert!(session.admits_key("7", 0, none));
        assert!(!session.admits_key("x", 0, none));
        assert!(TextCellSession::new("").admits_key("x", 0, none));

        session.input("Room 12");
        assert_eq!(session.blur(), CellSignal::Committed(json!("Room 12")));
    }

    #[test]
    fn discrete_session_skips_reselection() {
        let mut session = DiscreteCellSession::new("open");
        assert!(session.select("open").is_empty());
        assert_eq!(
            session.select("closed"),
            vec![
                CellSignal::Changed(json!("closed")),
                CellSignal::Committed(json!("closed")),
            ]
        );
        assert!(session.select("closed").is_empty());
    }
}
