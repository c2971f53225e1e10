use crate::domain::model::{FragmentKind, IndentStyle};
use crate::utils::error::{LadderError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Defaults loaded from a TOML file. Command-line flags take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub output: Option<OutputConfig>,
    pub sections: Option<SectionsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub indent: Option<IndentStyle>,
    pub indent_width: Option<usize>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionsConfig {
    pub kinds: Option<Vec<FragmentKind>>,
}

impl GeneratorConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LadderError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn indent_style(&self) -> Option<IndentStyle> {
        self.output.as_ref().and_then(|o| o.indent)
    }

    pub fn indent_width(&self) -> Option<usize> {
        self.output.as_ref().and_then(|o| o.indent_width)
    }

    pub fn color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.color)
    }

    pub fn kinds(&self) -> Option<&[FragmentKind]> {
        self.sections.as_ref().and_then(|s| s.kinds.as_deref())
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        if let Some(width) = self.indent_width() {
            validation::validate_range("output.indent_width", width, 1, 16)?;
        }
        if let Some(kinds) = self.kinds() {
            validation::validate_kinds("sections.kinds", kinds)?;
        }
        Ok(())
    }
}
