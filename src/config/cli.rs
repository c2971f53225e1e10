use crate::config::toml_config::{GeneratorConfig, DEFAULT_INDENT_WIDTH};
use crate::core::ladder::LadderPlan;
use crate::domain::model::{Arity, FragmentKind, Indent, IndentStyle};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "field-ladder")]
#[command(about = "Print the per-arity reflection dispatch branches for a field count")]
pub struct CliConfig {
    /// Number of fields of the target aggregate
    #[arg(value_name = "FIELD_COUNT", allow_negative_numbers = true)]
    pub field_count: i64,

    /// Emit every branch from this arity up to FIELD_COUNT
    #[arg(long, value_name = "ARITY", allow_negative_numbers = true)]
    pub from: Option<i64>,

    /// Only print these sections
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<FragmentKind>,

    #[arg(long, value_enum)]
    pub indent: Option<IndentStyle>,

    #[arg(long, help = "Spaces per level when --indent spaces")]
    pub indent_width: Option<usize>,

    #[arg(long, help = "Disable colored headers")]
    pub no_color: bool,

    /// TOML file with output defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges flags over `file` defaults into a printable plan.
    pub fn resolve(&self, file: &GeneratorConfig) -> Result<LadderPlan> {
        let arity = validation::validate_arity(self.field_count)?;

        let style = self
            .indent
            .or(file.indent_style())
            .unwrap_or(IndentStyle::Tab);
        let width = self
            .indent_width
            .or(file.indent_width())
            .unwrap_or(DEFAULT_INDENT_WIDTH);

        let kinds = if self.only.is_empty() {
            file.kinds()
                .map(<[FragmentKind]>::to_vec)
                .unwrap_or_else(|| FragmentKind::ALL.to_vec())
        } else {
            self.only.clone()
        };

        let plan = LadderPlan {
            from: arity,
            to: arity,
            kinds,
            indent: Indent::from_style(style, width),
            color: self.color_enabled(file),
        };

        match self.from {
            Some(from) => {
                validation::validate_ladder_range(from, self.field_count)?;
                plan.with_range(Arity::new(from)?)
            }
            None => Ok(plan),
        }
    }

    pub fn color_enabled(&self, file: &GeneratorConfig) -> bool {
        !self.no_color && file.color().unwrap_or(true)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_arity(self.field_count)?;
        if let Some(from) = self.from {
            validation::validate_ladder_range(from, self.field_count)?;
        }
        if !self.only.is_empty() {
            validation::validate_kinds("--only", &self.only)?;
        }
        if let Some(width) = self.indent_width {
            validation::validate_range("--indent-width", width, 1, 16)?;
        }
        Ok(())
    }
}
