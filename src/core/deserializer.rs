use crate::core::branch::{Bindings, Branch};
use crate::domain::model::{Arity, FragmentKind, Indent};
use crate::domain::ports::FragmentTemplate;

/// Branch assigning every field of `out` from `jsonObject`.
///
/// Guarded by the `fieldCount` already computed at the call site rather than
/// the arity trait. Each assignment returns `ResultErr()` on failure before
/// the next one runs; fields assigned earlier are left as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldwiseDeserializer {
    pub indent: Indent,
}

impl FieldwiseDeserializer {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }
}

impl FragmentTemplate for FieldwiseDeserializer {
    fn kind(&self) -> FragmentKind {
        FragmentKind::Deserializer
    }

    fn render(&self, arity: Arity) -> String {
        let bindings = Bindings::for_arity(arity);

        let mut branch = Branch::open(arity, &format!("fieldCount == {}", arity.get()), self.indent);
        branch.line(1, bindings.destructure("out"));
        for (index, name) in bindings.iter() {
            branch.line(
                1,
                format!(
                    "if (internal::tryAssignFieldFromJsonObject({}, getFieldName<T, {}>(), jsonObject) == false) return ResultErr();",
                    name, index
                ),
            );
        }
        branch.close()
    }
}
