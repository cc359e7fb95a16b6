//! Wire contract of the CSV import job queue.
//!
//! The backend parses the uploaded file in a background job; the client only
//! ever sees the job through these two shapes: the handle returned by the
//! upload endpoint and the status snapshot returned by the progress endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Job handle returned by `POST /employee/import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadAccepted {
    pub job_id: String,
    #[serde(default)]
    pub message: String,
}

/// Queue state of an import job, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Waiting,
    Active,
    Completed,
    Failed,
    Delayed,
    Paused,
    /// The queue no longer knows this job id (expired or evicted).
    NotFound,
}

impl JobStatus {
    /// A terminal status will never change again; polling must stop on it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::NotFound)
    }
}

/// One snapshot of an import job from `GET /employee/import/{jobId}/progress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportJob {
    pub job_id: String,
    pub status: JobStatus,
    /// Percentage reported by the job processor. Absent until the job has
    /// started; not trusted to be in range or monotonic.
    #[serde(default)]
    pub progress: Option<f64>,
    /// Opaque result payload, present once the job completed. The client
    /// only uses its presence, never its contents.
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub failed_reason: Option<String>,
}

impl ImportJob {
    /// Progress as a display percentage: absent or non-finite values become
    /// 0, everything else is clamped to 0..=100.
    pub fn progress_percent(&self) -> u8 {
        match self.progress {
            Some(p) if p.is_finite() => p.clamp(0.0, 100.0).round() as u8,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_snake_case() {
        let statuses: Vec<(&str, JobStatus)> = vec![
            ("\"waiting\"", JobStatus::Waiting),
            ("\"active\"", JobStatus::Active),
            ("\"completed\"", JobStatus::Completed),
            ("\"failed\"", JobStatus::Failed),
            ("\"delayed\"", JobStatus::Delayed),
            ("\"paused\"", JobStatus::Paused),
            ("\"not_found\"", JobStatus::NotFound),
        ];
        for (json, expected) in statuses {
            let parsed: JobStatus = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::NotFound.is_terminal());
        assert!(!JobStatus::Waiting.is_terminal());
        assert!(!JobStatus::Active.is_terminal());
        assert!(!JobStatus::Delayed.is_terminal());
        assert!(!JobStatus::Paused.is_terminal());
    }

    #[test]
    fn test_snapshot_without_progress() {
        let job: ImportJob =
            serde_json::from_str(r#"{"jobId":"job-1","status":"waiting"}"#).unwrap();
        assert_eq!(job.progress_percent(), 0);
        assert!(job.result.is_none());
        assert!(job.failed_reason.is_none());
    }

    #[test]
    fn test_progress_clamped() {
        let mut job: ImportJob =
            serde_json::from_str(r#"{"jobId":"job-1","status":"active","progress":40}"#).unwrap();
        assert_eq!(job.progress_percent(), 40);

        job.progress = Some(140.0);
        assert_eq!(job.progress_percent(), 100);

        job.progress = Some(-5.0);
        assert_eq!(job.progress_percent(), 0);

        job.progress = Some(f64::NAN);
        assert_eq!(job.progress_percent(), 0);
    }

    #[test]
    fn test_failed_snapshot_carries_reason() {
        let job: ImportJob = serde_json::from_str(
            r#"{"jobId":"job-9","status":"failed","progress":62,"failedReason":"Invalid header row"}"#,
        )
        .unwrap();
        assert!(job.status.is_terminal());
        assert_eq!(job.failed_reason.as_deref(), Some("Invalid header row"));
    }
}
