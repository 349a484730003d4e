use std::io::Write;
use std::sync::Arc;

use common::{AppError, Result};
use normalizer::{normalize, NormalizedMergeRequest, RawPullRequest, TargetProjectContext};
use serde_json::Value;
use tracing::{info, instrument, warn};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportReport {
    pub imported: Vec<NormalizedMergeRequest>,
    /// Numbers of pull requests rejected as cross-repository.
    pub skipped: Vec<i64>,
    /// Input positions of records that could not be decoded.
    pub malformed: Vec<usize>,
}

pub struct Importer {
    project: Arc<dyn TargetProjectContext>,
}

impl Importer {
    pub fn new(project: Arc<dyn TargetProjectContext>) -> Self {
        Self { project }
    }

    /// Normalizes every record against the same project, keeping input order.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn import(&self, records: &[RawPullRequest]) -> ImportReport {
        let mut report = ImportReport::default();
        for raw in records {
            self.import_one(raw, &mut report);
        }
        log_summary(&report);
        report
    }

    /// Decodes and normalizes records one at a time; a record that fails to
    /// decode is reported and does not stop the rest of the batch.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn import_values(&self, records: Vec<Value>) -> ImportReport {
        let mut report = ImportReport::default();
        for (index, value) in records.into_iter().enumerate() {
            match RawPullRequest::from_value(value) {
                Ok(raw) => self.import_one(&raw, &mut report),
                Err(err) => {
                    warn!(index, error = %err, "skipping malformed pull request");
                    report.malformed.push(index);
                }
            }
        }
        log_summary(&report);
        report
    }

    fn import_one(&self, raw: &RawPullRequest, report: &mut ImportReport) {
        match normalize(raw, self.project.as_ref()).into_valid() {
            Some(merge_request) => report.imported.push(merge_request),
            None => {
                warn!(number = raw.number, "skipping cross-repository pull request");
                report.skipped.push(raw.number);
            }
        }
    }
}

fn log_summary(report: &ImportReport) {
    info!(
        imported = report.imported.len(),
        skipped = report.skipped.len(),
        malformed = report.malformed.len(),
        "pull request import finished"
    );
}

/// Reads the batch as untyped JSON so each record can be decoded on its own.
pub async fn load_pull_requests(path: &str) -> Result<Vec<Value>> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|err| AppError::io(path, err))?;
    serde_json::from_slice(&data).map_err(AppError::payload)
}

/// One JSON document per line.
pub fn write_json_lines<W: Write>(mut out: W, records: &[NormalizedMergeRequest]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut out, record).map_err(AppError::payload)?;
        out.write_all(b"\n")
            .map_err(|err| AppError::io("output", err))?;
    }
    out.flush().map_err(|err| AppError::io("output", err))
}
