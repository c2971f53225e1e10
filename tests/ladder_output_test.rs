use anyhow::Result;
use field_ladder::{
    fieldwise_deserializer, named_fields_extractor, nth_field_accessor, Arity, FragmentKind, Indent,
    LadderEngine, LadderPlan,
};

fn render(plan: LadderPlan) -> Result<String> {
    let mut buffer = Vec::new();
    LadderEngine::new(plan).run(&mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[test]
fn single_arity_output_matches_fragments() -> Result<()> {
    let arity = Arity::new(2)?;
    let mut plan = LadderPlan::single(arity);
    plan.color = false;

    let expected = format!(
        "==== nthPtr ====\n\n{}\n\n==== fieldNames ====\n\n{}\n\n==== deserialize ====\n\n{}\n",
        nth_field_accessor(arity),
        named_fields_extractor(arity),
        fieldwise_deserializer(arity)
    );
    assert_eq!(render(plan)?, expected);
    Ok(())
}

#[test]
fn repeated_runs_are_byte_identical() -> Result<()> {
    let plan = LadderPlan::single(Arity::new(9)?);
    assert_eq!(render(plan.clone())?, render(plan)?);
    Ok(())
}

#[test]
fn headers_are_colored_but_fragments_are_not() -> Result<()> {
    let output = render(LadderPlan::single(Arity::new(3)?))?;

    assert_eq!(output.matches("\x1b[96m==== ").count(), 3);
    for line in output.lines().filter(|line| !line.contains("====")) {
        assert!(!line.contains('\x1b'), "unexpected escape in {:?}", line);
    }
    Ok(())
}

#[test]
fn full_ladder_assembles_from_base_case() -> Result<()> {
    let plan = LadderPlan {
        kinds: vec![FragmentKind::Deserializer],
        indent: Indent::Spaces(2),
        color: false,
        ..LadderPlan::single(Arity::new(4)?)
    }
    .with_range(Arity::new(1)?)?;

    let output = render(plan)?;
    let body = output
        .strip_prefix("==== deserialize ====\n\n")
        .expect("single section header");

    let openings: Vec<&str> = body
        .lines()
        .filter(|line| line.contains("constexpr (fieldCount =="))
        .collect();
    assert_eq!(
        openings,
        vec![
            "if constexpr (fieldCount == 1) {",
            "else if constexpr (fieldCount == 2) {",
            "else if constexpr (fieldCount == 3) {",
            "else if constexpr (fieldCount == 4) {",
        ]
    );
    assert!(body.contains("\n  auto&& [p1, p2, p3, p4] = out;\n"));
    Ok(())
}
