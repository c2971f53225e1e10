pub mod accessor;
pub mod branch;
pub mod deserializer;
pub mod extractor;
pub mod ladder;

pub use crate::domain::model::{Arity, Fragment, FragmentKind, Indent};
pub use crate::domain::ports::FragmentTemplate;
pub use crate::utils::error::Result;

use accessor::NthFieldAccessor;
use deserializer::FieldwiseDeserializer;
use extractor::NamedFieldsExtractor;

/// Accessor branch for `arity`, tab-indented.
pub fn nth_field_accessor(arity: Arity) -> Fragment {
    NthFieldAccessor::default().generate(arity)
}

/// Named-fields branch for `arity`, tab-indented.
pub fn named_fields_extractor(arity: Arity) -> Fragment {
    NamedFieldsExtractor::default().generate(arity)
}

/// Deserializer branch for `arity`, tab-indented.
pub fn fieldwise_deserializer(arity: Arity) -> Fragment {
    FieldwiseDeserializer::default().generate(arity)
}
