//! Docstring filter pipeline

use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;
use tree_sitter::Language;

use super::record::FunctionRecord;
use super::result::{FilterStats, PipelineOutput, RecordResult};
use crate::config::FilterConfig;
use crate::features::admissibility::AdmissibilityFilter;
use crate::features::cleaning::DocstringCleaner;
use crate::shared::models::Result;
use crate::shared::utils::tree_sitter::{find_function_nodes, parse_source};

/// Admissibility + cleaning over batches of records
#[derive(Debug)]
pub struct DocstringFilterPipeline {
    config: FilterConfig,
    admissibility: AdmissibilityFilter,
    cleaner: DocstringCleaner,
}

impl DocstringFilterPipeline {
    /// Create a pipeline; the configuration is validated first
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            admissibility: AdmissibilityFilter::new(&config),
            cleaner: DocstringCleaner::new(&config),
            config,
        })
    }

    /// Create a pipeline from a YAML configuration file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(FilterConfig::from_yaml_file(path)?)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter one record
    pub fn process(&self, record: &FunctionRecord) -> RecordResult {
        let admission = self
            .admissibility
            .admit(&record.identifier, record.has_error, record.line_span());
        if !admission.is_accepted() {
            return RecordResult {
                identifier: record.identifier.clone(),
                admission,
                cleaned: None,
                restates_identifier: false,
            };
        }

        let cleaned = self.cleaner.clean(&record.docstring);
        let restates_identifier = cleaned.docstring.as_deref().is_some_and(|docstring| {
            self.admissibility
                .restates_identifier(&record.identifier, docstring)
        });
        if restates_identifier {
            tracing::debug!(
                identifier = record.identifier.as_str(),
                "docstring restates identifier"
            );
        }

        RecordResult {
            identifier: record.identifier.clone(),
            admission,
            cleaned: Some(cleaned),
            restates_identifier,
        }
    }

    /// Filter a batch in parallel; results keep the input order
    pub fn run(&self, records: &[FunctionRecord]) -> PipelineOutput {
        let start = Instant::now();

        let results: Vec<RecordResult> = records
            .par_iter()
            .map(|record| self.process(record))
            .collect();

        let mut stats = FilterStats::default();
        for result in &results {
            stats.record(result);
        }

        tracing::info!(
            total = stats.total,
            accepted = stats.accepted,
            inadmissible = stats.inadmissible(),
            rejected = stats.rejected_docstrings,
            restated = stats.restated,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "docstring filter batch complete"
        );

        PipelineOutput { results, stats }
    }

    /// Parse `source` and collect a record for every documented function
    /// whose node kind is in `kinds`
    pub fn extract_records(
        language: &Language,
        source: &str,
        kinds: &[&str],
    ) -> Result<Vec<FunctionRecord>> {
        let tree = parse_source(language, source)?;
        Ok(find_function_nodes(tree.root_node(), kinds)
            .iter()
            .filter_map(|node| FunctionRecord::from_node(node, source))
            .collect())
    }

    /// Same as [`Self::extract_records`] for raw bytes
    pub fn extract_records_from_bytes(
        language: &Language,
        bytes: &[u8],
        kinds: &[&str],
    ) -> Result<Vec<FunctionRecord>> {
        let source = std::str::from_utf8(bytes)?;
        Self::extract_records(language, source, kinds)
    }

    /// Same as [`Self::extract_records`] for a file on disk
    pub fn extract_records_from_file(
        language: &Language,
        path: impl AsRef<Path>,
        kinds: &[&str],
    ) -> Result<Vec<FunctionRecord>> {
        let bytes = std::fs::read(path)?;
        Self::extract_records_from_bytes(language, &bytes, kinds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::features::admissibility::{Admission, RejectReason};
    use crate::shared::models::{FilterError, Span};

    fn record(identifier: &str, lines: u32, docstring: &str) -> FunctionRecord {
        FunctionRecord::new(identifier, Span::lines(1, lines), docstring)
    }

    #[test]
    fn test_process_stages() {
        let pipeline = DocstringFilterPipeline::new(FilterConfig::default()).unwrap();

        let kept = pipeline.process(&record(
            "computeTotal",
            8,
            "/** Adds up the price of every line item. */",
        ));
        assert_eq!(kept.docstring(), Some("Adds up the price of every line item."));

        let trivial =
            pipeline.process(&record("computeTotal", 1, "/** Adds up the prices of items. */"));
        assert_eq!(trivial.admission, Admission::Rejected(RejectReason::TrivialBody));
        assert!(trivial.cleaned.is_none());

        let errored =
            pipeline.process(&record("parse", 8, "Parses the whole input stream").with_error(true));
        assert_eq!(errored.admission, Admission::Rejected(RejectReason::ErrorNode));
    }

    #[test]
    fn test_run_preserves_order() {
        let pipeline = DocstringFilterPipeline::new(FilterConfig::default()).unwrap();
        let records: Vec<FunctionRecord> = (0..64)
            .map(|i| {
                record(
                    &format!("handler{i}"),
                    10,
                    "Dispatches the request to the matching route",
                )
            })
            .collect();

        let output = pipeline.run(&records);
        let identifiers: Vec<&str> = output
            .results
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        let expected: Vec<String> = (0..64).map(|i| format!("handler{i}")).collect();
        assert_eq!(identifiers, expected);
        assert_eq!(output.stats.total, 64);
        assert_eq!(output.stats.accepted, 64);
    }

    #[test]
    fn test_strict_preset_drops_restatements() {
        let pipeline = DocstringFilterPipeline::new(FilterConfig::preset(Preset::Strict)).unwrap();
        let output = pipeline.run(&[
            record("loadUserProfile", 10, "Load user profile data."),
            record("loadUserProfile", 10, "Reads the profile from the database and caches it."),
        ]);
        assert!(output.results[0].restates_identifier);
        assert!(!output.results[1].restates_identifier);
        assert_eq!(output.stats.restated, 1);
        assert_eq!(output.kept().count(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FilterConfig::default().with_token_bounds(5, 5);
        assert!(matches!(
            DocstringFilterPipeline::new(config),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_source() {
        let result = DocstringFilterPipeline::extract_records_from_bytes(
            &tree_sitter_python::language(),
            &[0x64, 0x65, 0x66, 0xff],
            &["function_definition"],
        );
        assert!(matches!(result, Err(FilterError::Utf8(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = DocstringFilterPipeline::extract_records_from_file(
            &tree_sitter_python::language(),
            "/nonexistent/module.py",
            &["function_definition"],
        );
        assert!(matches!(result, Err(FilterError::Io(_))));
    }
}
