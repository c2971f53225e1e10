use crate::domain::model::{Arity, Fragment, FragmentKind};

/// One branch template of the dispatch ladder, parametrised over arity.
///
/// Implementations are pure: the same arity always renders the same text.
pub trait FragmentTemplate {
    fn kind(&self) -> FragmentKind;

    fn render(&self, arity: Arity) -> String;

    fn generate(&self, arity: Arity) -> Fragment {
        Fragment {
            kind: self.kind(),
            arity,
            text: self.render(arity),
        }
    }
}
