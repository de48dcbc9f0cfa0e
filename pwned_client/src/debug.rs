//! In-memory debug log of requests and raw responses.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::response::ApiError;
use crate::signing::HttpMethod;

/// Which side of a round-trip a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugContext {
    Request,
    Response,
}

/// Method, URL and payload of one side of a call.
///
/// For requests `data` is the outgoing body; for responses it is the raw
/// body as received (absent if nothing was received).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugValue {
    pub request_method: HttpMethod,
    pub url: String,
    pub data: Option<String>,
}

/// One debug log entry with a snapshot of the error history at that time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugRecord {
    pub context: DebugContext,
    pub value: DebugValue,
    pub errors: Vec<ApiError>,
}

/// Append-only list of [`DebugRecord`]s
#[derive(Debug, Clone, Default)]
pub struct DebugLog {
    records: Vec<DebugRecord>,
}

impl DebugLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, context: DebugContext, value: DebugValue, errors: &[ApiError]) {
        self.records.push(DebugRecord {
            context,
            value,
            errors: errors.to_vec(),
        });
    }

    pub fn records(&self) -> &[DebugRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The two most recent records, oldest first
    pub fn last_pair(&self) -> Option<(&DebugRecord, &DebugRecord)> {
        match self.records.as_slice() {
            [.., request, response] => Some((request, response)),
            _ => None,
        }
    }

    /// Serialize the whole log as a JSON array
    pub fn to_report(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }

    /// Write the JSON report to `path`, returning the number of bytes written
    pub fn write_report(&self, path: impl AsRef<Path>) -> crate::Result<usize> {
        let report = self.to_report()?;
        std::fs::write(path, report.as_bytes())?;
        Ok(report.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value(data: Option<&str>) -> DebugValue {
        DebugValue {
            request_method: HttpMethod::Get,
            url: "http://x/ping?publicKey=p&signature=s".to_string(),
            data: data.map(str::to_string),
        }
    }

    #[test]
    fn test_last_pair_requires_two_records() {
        let mut log = DebugLog::new();
        assert!(log.last_pair().is_none());

        log.push(DebugContext::Request, value(None), &[]);
        assert!(log.last_pair().is_none());

        log.push(DebugContext::Response, value(Some("{}")), &[]);
        let (req, resp) = log.last_pair().unwrap();
        assert_eq!(req.context, DebugContext::Request);
        assert_eq!(resp.context, DebugContext::Response);
    }

    #[test]
    fn test_report_shape() {
        let mut log = DebugLog::new();
        log.push(
            DebugContext::Response,
            value(Some("oops")),
            &[ApiError::new("k", "r")],
        );

        let report: serde_json::Value = serde_json::from_str(&log.to_report().unwrap()).unwrap();
        assert_eq!(
            report,
            json!([{
                "context": "response",
                "value": {
                    "requestMethod": "GET",
                    "url": "http://x/ping?publicKey=p&signature=s",
                    "data": "oops"
                },
                "errors": [{"key": "k", "reason": "r"}]
            }])
        );
    }

    #[test]
    fn test_errors_are_snapshotted() {
        let mut log = DebugLog::new();
        let mut errors = vec![ApiError::new("a", "")];
        log.push(DebugContext::Request, value(None), &errors);
        errors.push(ApiError::new("b", ""));
        log.push(DebugContext::Response, value(None), &errors);

        assert_eq!(log.records()[0].errors.len(), 1);
        assert_eq!(log.records()[1].errors.len(), 2);
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.json");

        let mut log = DebugLog::new();
        log.push(DebugContext::Request, value(None), &[]);

        let written = log.write_report(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, contents.len());
        assert_eq!(contents, log.to_report().unwrap());
    }
}
