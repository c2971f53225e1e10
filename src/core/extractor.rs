use crate::core::branch::{Bindings, Branch};
use crate::domain::model::{Arity, FragmentKind, Indent};
use crate::domain::ports::FragmentTemplate;

/// Branch returning a `std::tuple` of `NamedField`s in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedFieldsExtractor {
    pub indent: Indent,
}

impl NamedFieldsExtractor {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }
}

impl FragmentTemplate for NamedFieldsExtractor {
    fn kind(&self) -> FragmentKind {
        FragmentKind::Extractor
    }

    fn render(&self, arity: Arity) -> String {
        let bindings = Bindings::for_arity(arity);
        let last = bindings.len() - 1;

        let mut branch = Branch::open(
            arity,
            &format!("internal::has_n_fields<T, {}>", arity.get()),
            self.indent,
        );
        branch.line(1, bindings.destructure("t"));
        branch.line(1, "return std::tuple(");
        for (index, name) in bindings.iter() {
            let terminator = if index == last { ");" } else { "," };
            branch.line(
                2,
                format!(
                    "NamedField<decltype({})>{{.name = getFieldName<T, {}>(), .value = {}}}{}",
                    name, index, name, terminator
                ),
            );
        }
        branch.close()
    }
}
