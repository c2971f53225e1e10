use crate::utils::error::{LadderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fields an aggregate declares. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arity(usize);

impl Arity {
    pub fn new(value: i64) -> Result<Self> {
        if value < 1 {
            return Err(LadderError::InvalidArity { value });
        }
        usize::try_from(value)
            .map(Arity)
            .map_err(|_| LadderError::InvalidArity { value })
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// The `n = 1` branch opens the ladder and carries no `else`.
    pub fn is_base_case(self) -> bool {
        self.0 == 1
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Accessor,
    Extractor,
    Deserializer,
}

impl FragmentKind {
    /// Print order of the sections.
    pub const ALL: [FragmentKind; 3] = [
        FragmentKind::Accessor,
        FragmentKind::Extractor,
        FragmentKind::Deserializer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FragmentKind::Accessor => "nthPtr",
            FragmentKind::Extractor => "fieldNames",
            FragmentKind::Deserializer => "deserialize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Tab,
    Spaces,
}

/// One level of indentation in generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    pub fn from_style(style: IndentStyle, width: usize) -> Self {
        match style {
            IndentStyle::Tab => Indent::Tab,
            IndentStyle::Spaces => Indent::Spaces(width),
        }
    }

    pub fn repeat(self, depth: usize) -> String {
        match self {
            Indent::Tab => "\t".repeat(depth),
            Indent::Spaces(width) => " ".repeat(width * depth),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub arity: Arity,
    pub text: String,
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
