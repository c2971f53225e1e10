use crate::core::accessor::NthFieldAccessor;
use crate::core::deserializer::FieldwiseDeserializer;
use crate::core::extractor::NamedFieldsExtractor;
use crate::domain::model::{Arity, FragmentKind, Indent};
use crate::domain::ports::FragmentTemplate;
use crate::utils::error::{LadderError, Result};
use crate::utils::palette::{paint, Tone};
use std::io::Write;

/// What one run prints: which sections, which arities, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderPlan {
    pub from: Arity,
    pub to: Arity,
    pub kinds: Vec<FragmentKind>,
    pub indent: Indent,
    pub color: bool,
}

impl LadderPlan {
    /// All three sections for a single arity, tab-indented, colored headers.
    pub fn single(arity: Arity) -> Self {
        Self {
            from: arity,
            to: arity,
            kinds: FragmentKind::ALL.to_vec(),
            indent: Indent::default(),
            color: true,
        }
    }

    pub fn with_range(mut self, from: Arity) -> Result<Self> {
        if from > self.to {
            return Err(LadderError::InvalidRange {
                from: from.get() as i64,
                to: self.to.get() as i64,
            });
        }
        self.from = from;
        Ok(self)
    }

    pub fn arities(&self) -> impl Iterator<Item = Arity> {
        // Every value in from..=to is >= from >= 1.
        (self.from.get()..=self.to.get()).filter_map(|n| Arity::new(n as i64).ok())
    }
}

pub fn template_for(kind: FragmentKind, indent: Indent) -> Box<dyn FragmentTemplate> {
    match kind {
        FragmentKind::Accessor => Box::new(NthFieldAccessor::new(indent)),
        FragmentKind::Extractor => Box::new(NamedFieldsExtractor::new(indent)),
        FragmentKind::Deserializer => Box::new(FieldwiseDeserializer::new(indent)),
    }
}

pub struct LadderEngine {
    plan: LadderPlan,
}

impl LadderEngine {
    pub fn new(plan: LadderPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &LadderPlan {
        &self.plan
    }

    /// Consecutive branches of one section, ascending arity.
    pub fn render_section(&self, kind: FragmentKind) -> String {
        let template = template_for(kind, self.plan.indent);
        self.plan
            .arities()
            .map(|arity| template.generate(arity).text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        // Fixed print order regardless of how the kinds were listed.
        let kinds: Vec<FragmentKind> = FragmentKind::ALL
            .into_iter()
            .filter(|kind| self.plan.kinds.contains(kind))
            .collect();

        for (position, kind) in kinds.iter().enumerate() {
            tracing::debug!(
                "Rendering {} for arities {}..={}",
                kind.label(),
                self.plan.from,
                self.plan.to
            );
            if position > 0 {
                writeln!(out)?;
            }
            let header = format!("==== {} ====", kind.label());
            writeln!(out, "{}", paint(Tone::Section, &header, self.plan.color))?;
            writeln!(out)?;
            writeln!(out, "{}", self.render_section(*kind))?;
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arity(n: i64) -> Arity {
        Arity::new(n).unwrap()
    }

    fn run_to_string(plan: LadderPlan) -> String {
        let mut buffer = Vec::new();
        LadderEngine::new(plan).run(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_sections_print_in_fixed_order() {
        let mut plan = LadderPlan::single(arity(2));
        plan.color = false;
        plan.kinds = vec![FragmentKind::Deserializer, FragmentKind::Accessor];

        let output = run_to_string(plan);
        let accessor = output.find("==== nthPtr ====").unwrap();
        let deserializer = output.find("==== deserialize ====").unwrap();
        assert!(accessor < deserializer);
        assert!(!output.contains("fieldNames"));
    }

    #[test]
    fn test_colored_headers() {
        let output = run_to_string(LadderPlan::single(arity(1)));
        assert!(output.starts_with("\x1b[96m==== nthPtr ====\x1b[0m\n\n"));
    }

    #[test]
    fn test_range_renders_base_case_first() {
        let plan = LadderPlan::single(arity(3)).with_range(arity(1)).unwrap();
        let engine = LadderEngine::new(plan);
        let section = engine.render_section(FragmentKind::Accessor);

        assert!(section.starts_with("if constexpr (has_n_fields<T, 1>)"));
        assert_eq!(section.matches("else if constexpr").count(), 2);
        let two = section.find("has_n_fields<T, 2>").unwrap();
        let three = section.find("has_n_fields<T, 3>").unwrap();
        assert!(two < three);
    }

    #[test]
    fn test_range_start_beyond_arity_is_rejected() {
        let result = LadderPlan::single(arity(2)).with_range(arity(3));
        assert!(matches!(
            result,
            Err(LadderError::InvalidRange { from: 3, to: 2 })
        ));
    }
}
