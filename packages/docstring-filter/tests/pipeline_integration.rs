//! Pipeline integration: tree-sitter extraction, admissibility, YAML config

mod common;

use common::*;
use docstring_filter::shared::utils::tree_sitter::{declared_name, find_function_nodes, parse_source};
use docstring_filter::{
    check_function, check_node_error, Admission, DocstringFilterPipeline, FilterConfig,
    FilterError, RejectReason,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn python() -> tree_sitter::Language {
    tree_sitter_python::language()
}

fn java() -> tree_sitter::Language {
    tree_sitter_java::language()
}

#[test]
fn test_error_nodes_detected() {
    let broken = parse_source(&python(), PYTHON_BROKEN).unwrap();
    assert!(check_node_error(&broken.root_node()));

    let clean = parse_source(&python(), PYTHON_BASKET).unwrap();
    assert!(!check_node_error(&clean.root_node()));

    let broken = parse_source(&java(), JAVA_BROKEN).unwrap();
    assert!(check_node_error(&broken.root_node()));
}

#[test]
fn test_check_function_on_tree_sitter_nodes() {
    let tree = parse_source(&python(), PYTHON_BASKET).unwrap();
    let verdicts: Vec<(String, Admission)> =
        find_function_nodes(tree.root_node(), &["function_definition"])
            .iter()
            .map(|node| {
                let name = declared_name(node, PYTHON_BASKET).unwrap();
                let verdict = check_function(node, &name, &[]);
                (name, verdict)
            })
            .collect();

    assert_eq!(
        verdicts,
        vec![
            ("__init__".to_string(), Admission::Rejected(RejectReason::Blacklisted)),
            ("compute_total".to_string(), Admission::Accepted),
            ("size".to_string(), Admission::Rejected(RejectReason::TrivialBody)),
            ("apply_discount".to_string(), Admission::Accepted),
        ]
    );
}

#[test]
fn test_python_module_end_to_end() {
    let records =
        DocstringFilterPipeline::extract_records(&python(), PYTHON_BASKET, &["function_definition"])
            .unwrap();
    assert_eq!(records.len(), 4);

    let pipeline = DocstringFilterPipeline::new(FilterConfig::default()).unwrap();
    let output = pipeline.run(&records);

    assert_eq!(kept_identifiers(&output), vec!["compute_total"]);
    assert_eq!(
        output.results[1].docstring(),
        Some("Sum the price of every item in the basket.\nDiscounts are applied after the sum.")
    );
    assert_eq!(output.stats.total, 4);
    assert_eq!(output.stats.blacklisted, 1);
    assert_eq!(output.stats.trivial_bodies, 1);
    assert_eq!(output.stats.rejected_docstrings, 1);
    assert_eq!(output.stats.truncations.get("under_development"), Some(&1));
}

#[test]
fn test_java_class_end_to_end() {
    let records =
        DocstringFilterPipeline::extract_records(&java(), JAVA_ACCOUNT, &["method_declaration"])
            .unwrap();
    let identifiers: Vec<&str> = records.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(identifiers, vec!["balance", "setOwner", "flush"]);

    let pipeline = DocstringFilterPipeline::new(FilterConfig::default()).unwrap();
    let output = pipeline.run(&records);

    assert_eq!(
        output.kept().collect::<Vec<_>>(),
        vec![("balance", "Returns the balance in cents, including pending deposits.")]
    );
    assert_eq!(
        output.results[1].admission,
        Admission::Rejected(RejectReason::Blacklisted)
    );
    assert!(output.results[2].admission.is_accepted());
    assert_eq!(output.stats.truncations.get("question"), Some(&1));
}

#[test]
fn test_pipeline_from_yaml_file() {
    let yaml = r#"
version: 1
preset: lenient
overrides:
  extra_blacklist: [compute]
"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let pipeline = DocstringFilterPipeline::from_yaml_file(file.path()).unwrap();
    let records =
        DocstringFilterPipeline::extract_records(&python(), PYTHON_BASKET, &["function_definition"])
            .unwrap();
    let output = pipeline.run(&records);

    assert!(kept_identifiers(&output).is_empty());
    assert_eq!(output.stats.blacklisted, 2);
}

#[test]
fn test_pipeline_rejects_bad_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"version: 7\npreset: standard\n").unwrap();
    assert!(matches!(
        DocstringFilterPipeline::from_yaml_file(file.path()),
        Err(FilterError::Config(_))
    ));
}

#[test]
fn test_records_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PYTHON_BASKET.as_bytes()).unwrap();

    let records = DocstringFilterPipeline::extract_records_from_file(
        &python(),
        file.path(),
        &["function_definition"],
    )
    .unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[1].span.start_line, 7);
}

#[test]
fn test_large_batch_keeps_order_and_counts() {
    let pipeline = DocstringFilterPipeline::new(FilterConfig::default()).unwrap();
    let output = pipeline.run(&fixture_batch(500));

    assert_eq!(output.results.len(), 500);
    assert_eq!(output.results[499].identifier, "handler499");
    assert_eq!(output.stats.accepted, 500);
    assert_eq!(output.stats.acceptance_rate(), 1.0);
}
