//! The report source seam.
//!
//! Fetching a raw report execution result is external to the engine: the
//! [`ReportSource`] trait models it as a single async operation that either
//! resolves with a parsed result, resolves with the not-found signal, or
//! fails. Transport concerns (retries, timeouts, authentication) belong to
//! implementations; the engine runs exactly once per successful resolution.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{ReportError, Result};
use crate::model::ReportExecution;

/// Literal body the reporting engine returns when a report cannot be
/// located, in place of a JSON payload.
pub const NOT_FOUND_SENTINEL: &str = "Report not found";

/// Outcome of one fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    Found(Box<ReportExecution>),
    NotFound,
}

/// Supplies raw report execution results by report name.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch_report(&self, report_name: &str) -> Result<FetchOutcome>;
}

/// Parses one raw response body, honoring the not-found sentinel.
///
/// The sentinel is checked before JSON parsing so a missing report is never
/// misreported as a malformed payload.
pub fn parse_response(body: &str) -> Result<FetchOutcome> {
    if body.trim() == NOT_FOUND_SENTINEL {
        return Ok(FetchOutcome::NotFound);
    }
    let result = serde_json::from_str(body)?;
    Ok(FetchOutcome::Found(Box::new(result)))
}

/// File-backed source resolving `<report name>.json` under a base directory.
///
/// Used by the CLI and tests; a missing file maps to the not-found outcome,
/// matching what the live reporting engine signals for an unknown name.
#[derive(Debug, Clone)]
pub struct FileSource {
    base_dir: PathBuf,
}

impl FileSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl ReportSource for FileSource {
    async fn fetch_report(&self, report_name: &str) -> Result<FetchOutcome> {
        let path = self.base_dir.join(format!("{report_name}.json"));
        let body = match tokio::fs::read_to_string(&path).await {
            Ok(body) => body,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(FetchOutcome::NotFound);
            }
            Err(err) => return Err(ReportError::Io(err)),
        };
        parse_response(&body)
    }
}
