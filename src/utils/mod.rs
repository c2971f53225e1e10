pub mod error;
pub mod logger;
pub mod palette;
pub mod validation;
