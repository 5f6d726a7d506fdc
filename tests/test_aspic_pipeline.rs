use crustaspic::{
    aa::Semantics,
    aspic::{build_arguments, ArgumentationTheory, Language, OrderingStrategy, Premise},
    error::ArgumentationError,
    io::{AspartixReader, AspartixWriter, InstanceReader},
    solvers,
};
use std::str::FromStr;

fn scenario_b(strategy: OrderingStrategy) -> ArgumentationTheory<&'static str> {
    let mut language = Language::new_with_labels(&["a", "r", "-r", "-s", "s", "t", "q", "p", "-p"]);
    language.new_contradictory(&"r", &"-r").unwrap();
    language.new_contradictory(&"s", &"-s").unwrap();
    language.new_contradictory(&"p", &"-p").unwrap();
    build_arguments(
        language,
        &[("s1", vec!["t", "q"], "-p")],
        &[("d1", vec!["-s"], "t"), ("d2", vec!["r"], "q"), ("d3", vec!["a"], "p")],
        &["a", "r", "-r", "-s"].map(Premise::Ordinary),
        &[],
        &[],
        strategy,
    )
    .unwrap()
}

fn extension_names(theory: &ArgumentationTheory<&'static str>, semantics: Semantics) -> Vec<Vec<String>> {
    let af = theory.to_framework("scenario_b").unwrap();
    solvers::extensions(&af, semantics)
        .unwrap()
        .iter()
        .map(|e| e.iter().map(|a| a.label().clone()).collect())
        .collect()
}

fn names(v: &[&[&str]]) -> Vec<Vec<String>> {
    v.iter()
        .map(|e| e.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_scenario_b_sizes() {
    let theory = scenario_b(OrderingStrategy::from_str("lle").unwrap());
    assert_eq!(8, theory.n_arguments());
    assert_eq!(5, theory.defeat_ids().len());
    let af = theory.to_framework("scenario_b").unwrap();
    assert_eq!(8, af.n_arguments());
    assert_eq!(5, af.n_defeats());
}

#[test]
fn test_scenario_b_grounded() {
    let theory = scenario_b(OrderingStrategy::default());
    assert_eq!(
        names(&[&["A1", "A4", "A5"]]),
        extension_names(&theory, Semantics::GR)
    );
}

#[test]
fn test_scenario_b_preferred_and_stable() {
    let theory = scenario_b(OrderingStrategy::default());
    let expected = names(&[
        &["A1", "A2", "A4", "A5", "A6", "A8"],
        &["A1", "A3", "A4", "A5", "A7"],
    ]);
    assert_eq!(expected, extension_names(&theory, Semantics::PR));
    assert_eq!(expected, extension_names(&theory, Semantics::ST));
    assert_eq!(expected, extension_names(&theory, Semantics::SST));
}

#[test]
fn test_rebuild_is_deterministic() {
    let first = scenario_b(OrderingStrategy::default());
    let second = scenario_b(OrderingStrategy::default());
    assert_eq!(first.defeat_ids(), second.defeat_ids());
    let describe = |t: &ArgumentationTheory<&'static str>| {
        t.iter_arguments().map(|a| t.describe(a)).collect::<Vec<String>>()
    };
    assert_eq!(describe(&first), describe(&second));
}

#[test]
fn test_exported_framework_reads_back() {
    let theory = scenario_b(OrderingStrategy::default());
    let af = theory.to_framework("scenario_b").unwrap();
    let mut buffer = Vec::new();
    AspartixWriter::default().write_framework(&af, &mut buffer).unwrap();
    let read = AspartixReader::default().read(&mut buffer.as_slice()).unwrap();
    assert_eq!(
        af.iter_defeats()
            .map(|d| (d.attacker().id(), d.attacked().id()))
            .collect::<Vec<_>>(),
        read.iter_defeats()
            .map(|d| (d.attacker().id(), d.attacked().id()))
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_invalid_language_builds_nothing() {
    let language = Language::new_with_labels(&["a", "b"]);
    let err = build_arguments(
        language,
        &[],
        &[("d1", vec!["a"], "c")],
        &[Premise::Ordinary("a")],
        &[],
        &[],
        OrderingStrategy::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ArgumentationError>(),
        Some(ArgumentationError::InvalidLanguage { element, .. }) if element == "c"
    ));
}

#[test]
fn test_duplicate_premise() {
    let language = Language::new_with_labels(&["a"]);
    let err = build_arguments(
        language,
        &[],
        &[],
        &[Premise::Ordinary("a"), Premise::Axiom("a")],
        &[],
        &[],
        OrderingStrategy::default(),
    )
    .unwrap_err();
    assert_eq!(
        Some(&ArgumentationError::DuplicatePremise("a".to_string())),
        err.downcast_ref::<ArgumentationError>()
    );
}
