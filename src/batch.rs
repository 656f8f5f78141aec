//! Batch processing over a directory of saved pages.
//!
//! A broken page never stops the batch. Structural failures (missing file,
//! missing content region) are logged at error level so systematic download
//! problems stand out; field-mapping failures are logged as warnings.

use crate::document::PageDocument;
use crate::error::{ExtractError, Result};
use crate::extractor::extract_article;
use crate::options::ExtractOptions;
use crate::scanner::scan_directory;
use crate::ArticleRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Result of processing one page.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<ArticleRecord>,
}

/// Outcomes of a whole batch, in scan order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Successfully extracted records
    pub fn records(&self) -> impl Iterator<Item = &ArticleRecord> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Failed pages with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ExtractError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.path.as_path(), e)))
    }

    pub fn record_count(&self) -> usize {
        self.records().count()
    }

    pub fn structural_failures(&self) -> usize {
        self.failures().filter(|(_, e)| e.is_structural()).count()
    }

    pub fn field_failures(&self) -> usize {
        self.failures().filter(|(_, e)| !e.is_structural()).count()
    }

    /// Consume the report, keeping only the records
    pub fn into_records(self) -> Vec<ArticleRecord> {
        self.outcomes.into_iter().filter_map(|o| o.result.ok()).collect()
    }
}

/// Load one saved page and extract its record.
pub fn process_file(path: &Path, options: &ExtractOptions) -> Result<ArticleRecord> {
    let page = PageDocument::load(path, options)?;
    extract_article(&page, options).map_err(|source| ExtractError::Field {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan `root` and process every saved page under it.
///
/// ## Errors
///
/// Only a missing `root` fails the call. Per-page failures are reported in
/// the returned [`BatchReport`].
pub fn process_directory(root: &Path, options: &ExtractOptions) -> Result<BatchReport> {
    let pages = scan_directory(root, &options.target_file_name)?;
    info!("processing {} pages under {}", pages.len(), root.display());

    let mut report = BatchReport::default();
    for path in pages {
        debug!("extracting {}", path.display());
        let result = process_file(&path, options);
        match &result {
            Ok(_) => {}
            Err(e) if e.is_structural() => error!("{}", e),
            Err(e) => warn!("skipping page: {}", e),
        }
        report.outcomes.push(FileOutcome { path, result });
    }

    info!(
        "extracted {} records ({} structural failures, {} field failures)",
        report.record_count(),
        report.structural_failures(),
        report.field_failures()
    );
    Ok(report)
}
