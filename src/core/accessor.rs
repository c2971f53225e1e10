use crate::core::branch::{Bindings, Branch};
use crate::domain::model::{Arity, FragmentKind, Indent};
use crate::domain::ports::FragmentTemplate;

/// Branch returning `ptr<>` to the field selected by the call-site index `N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NthFieldAccessor {
    pub indent: Indent,
}

impl NthFieldAccessor {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }
}

impl FragmentTemplate for NthFieldAccessor {
    fn kind(&self) -> FragmentKind {
        FragmentKind::Accessor
    }

    fn render(&self, arity: Arity) -> String {
        let n = arity.get();
        let bindings = Bindings::for_arity(arity);
        let noun = if arity.is_base_case() { "field" } else { "fields" };

        let mut branch = Branch::open(arity, &format!("has_n_fields<T, {}>", n), self.indent);
        branch.line(
            1,
            format!(
                "static_assert(N < {}, \"Cannot access a field beyond the number within the field. T has {} {}\");",
                n, n, noun
            ),
        );
        branch.line(1, bindings.destructure("t"));
        for (index, name) in bindings.iter() {
            branch.line(
                1,
                format!(
                    "if constexpr (N == {}) return ptr<decltype({})>{{&{}}};",
                    index, name, name
                ),
            );
        }
        branch.close()
    }
}
