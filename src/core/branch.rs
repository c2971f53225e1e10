//! Shared building blocks for the three branch templates: the positional
//! binding list and the `if constexpr` branch wrapper.

use crate::domain::model::{Arity, Indent};

/// Synthetic names `p1..pN`, one per field position.
#[derive(Debug, Clone)]
pub struct Bindings {
    names: Vec<String>,
}

impl Bindings {
    pub fn for_arity(arity: Arity) -> Self {
        let names = (1..=arity.get()).map(|i| format!("p{}", i)).collect();
        Self { names }
    }

    /// Zero-based field index paired with its binding name.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Structured binding of `source`, e.g. `auto&& [p1, p2] = t;`.
    pub fn destructure(&self, source: &str) -> String {
        format!("auto&& [{}] = {};", self.names.join(", "), source)
    }
}

/// One rung of the ladder. The base case opens with `if`, every other arity chains with `else if`.
pub struct Branch {
    indent: Indent,
    lines: Vec<String>,
}

impl Branch {
    pub fn open(arity: Arity, condition: &str, indent: Indent) -> Self {
        let keyword = if arity.is_base_case() { "if" } else { "else if" };
        Self {
            indent,
            lines: vec![format!("{} constexpr ({}) {{", keyword, condition)],
        }
    }

    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) -> &mut Self {
        self.lines
            .push(format!("{}{}", self.indent.repeat(depth), text.as_ref()));
        self
    }

    pub fn close(mut self) -> String {
        self.lines.push("}".to_string());
        self.lines.join("\n")
    }
}
