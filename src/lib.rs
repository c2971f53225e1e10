pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::GeneratorConfig;

pub use crate::core::ladder::{LadderEngine, LadderPlan};
pub use crate::core::{fieldwise_deserializer, named_fields_extractor, nth_field_accessor};
pub use domain::model::{Arity, Fragment, FragmentKind, Indent};
pub use utils::error::{LadderError, Result};
