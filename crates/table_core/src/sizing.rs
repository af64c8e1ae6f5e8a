//! Declarative column sizing and alignment resolved into rendering hints.

use serde::{Deserialize, Serialize};

use crate::model::ColumnMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal text alignment for a column.
pub enum ColumnAlign {
    /// Start-aligned text.
    Left,
    /// End-aligned text, used for numeric columns.
    Right,
    /// Centered text.
    Center,
}

impl ColumnAlign {
    /// Stable token used by `data-ui-align` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named width step.
pub enum SizeToken {
    /// No constraint (`auto`).
    None,
    /// 96px.
    Xs,
    /// 128px.
    Sm,
    /// 192px.
    Md,
    /// 256px.
    Lg,
    /// 320px.
    Xl,
    /// 384px.
    Xxl,
}

impl SizeToken {
    /// Parses a token name; returns `None` for anything that is not a known step.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "xs" => Some(Self::Xs),
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            "2xl" => Some(Self::Xxl),
            _ => None,
        }
    }

    /// Token name as written in column metadata.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    /// CSS length for this step.
    pub fn css(self) -> &'static str {
        match self {
            Self::None => "auto",
            Self::Xs => "96px",
            Self::Sm => "128px",
            Self::Md => "192px",
            Self::Lg => "256px",
            Self::Xl => "320px",
            Self::Xxl => "384px",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// A min/max width: either a named step or a raw CSS length.
pub enum SizeValue {
    /// Named step.
    Token(SizeToken),
    /// Raw CSS length passed through verbatim.
    Raw(String),
}

impl SizeValue {
    /// Parses `raw`; unknown names are kept verbatim as CSS.
    pub fn parse(raw: &str) -> Self {
        match SizeToken::from_name(raw.trim()) {
            Some(token) => Self::Token(token),
            None => Self::Raw(raw.to_string()),
        }
    }

    /// CSS length for this value.
    pub fn css(&self) -> String {
        match self {
            Self::Token(token) => token.css().to_string(),
            Self::Raw(raw) => raw.clone(),
        }
    }

    /// Whether this is the `none` step.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::Token(SizeToken::None))
    }
}

impl From<&str> for SizeValue {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for SizeValue {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<SizeToken> for SizeValue {
    fn from(token: SizeToken) -> Self {
        Self::Token(token)
    }
}

impl From<SizeValue> for String {
    fn from(value: SizeValue) -> Self {
        match value {
            SizeValue::Token(token) => token.name().to_string(),
            SizeValue::Raw(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Width rules for one column.
pub struct ColumnSizing {
    /// Fixed CSS width.
    pub width: Option<String>,
    /// Minimum width.
    pub min_width: Option<SizeValue>,
    /// Maximum width.
    pub max_width: Option<SizeValue>,
    /// Explicit truncation; defaults to on whenever a non-`none` max width is set.
    pub truncate: Option<bool>,
}

impl ColumnSizing {
    /// Fixed-width sizing.
    pub fn fixed(width: impl Into<String>) -> Self {
        Self {
            width: Some(width.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolved rendering hints for one column.
pub struct SizingHints {
    /// CSS width.
    pub width: Option<String>,
    /// CSS min-width.
    pub min_width: Option<String>,
    /// CSS max-width.
    pub max_width: Option<String>,
    /// Whether cell text is clipped with an ellipsis.
    pub should_truncate: bool,
    /// Header alignment.
    pub header_align: Option<ColumnAlign>,
    /// Cell alignment, also forwarded into editable cell payloads.
    pub cell_align: Option<ColumnAlign>,
}

impl SizingHints {
    /// Inline style declarations, e.g. `width:40px;min-width:128px`.
    pub fn style(&self) -> String {
        [
            ("width", &self.width),
            ("min-width", &self.min_width),
            ("max-width", &self.max_width),
        ]
        .into_iter()
        .filter_map(|(property, value)| value.as_ref().map(|value| format!("{property}:{value}")))
        .collect::<Vec<_>>()
        .join(";")
    }

    /// Class hooks for truncation and cell alignment.
    pub fn class_tokens(&self) -> Vec<&'static str> {
        let mut tokens = Vec::new();
        if self.should_truncate {
            tokens.push("ui-cell-truncate");
        }
        match self.cell_align {
            Some(ColumnAlign::Left) => tokens.push("ui-align-left"),
            Some(ColumnAlign::Right) => tokens.push("ui-align-right"),
            Some(ColumnAlign::Center) => tokens.push("ui-align-center"),
            None => {}
        }
        tokens
    }
}

/// Resolves column metadata into rendering hints.
pub fn resolve_sizing(meta: &ColumnMeta) -> SizingHints {
    let sizing = meta.sizing.clone().unwrap_or_default();
    let max_constrained = sizing
        .max_width
        .as_ref()
        .map(|max| !max.is_none())
        .unwrap_or(false);

    SizingHints {
        width: sizing.width.clone(),
        min_width: sizing.min_width.as_ref().map(SizeValue::css),
        max_width: sizing.max_width.as_ref().map(SizeValue::css),
        should_truncate: sizing.truncate.unwrap_or(max_constrained),
        header_align: meta.header_align.or(meta.align),
        cell_align: meta.align,
    }
}
