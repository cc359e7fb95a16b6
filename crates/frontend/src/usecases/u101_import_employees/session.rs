//! State machine for one CSV import session.
//!
//! Kept free of DOM and network concerns: the view feeds events in and
//! executes the returned [`ImportEffect`]s. Terminal snapshots move the
//! session out of `Polling`, so their side effects can fire at most once
//! no matter how many times the poller reports the same status.

use contracts::usecases::u101_import_employees::{ImportJob, JobStatus};

pub const POLL_INTERVAL_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportPhase {
    #[default]
    Idle,
    FileSelected,
    Uploading,
    Polling,
    Completed,
    Failed,
    Closed,
}

/// Side effects requested by the session. Executed by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportEffect {
    InvalidateEmployees,
    NotifySuccess { title: String, body: String },
    NotifyFailure { title: String, body: String },
    CloseModal,
    RefreshList,
}

/// Outcome of a start-upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartUpload {
    /// Fire the upload request.
    Begin,
    /// Validation failed; show the effect, do not upload.
    Rejected(ImportEffect),
    /// Already running or closed; nothing to do.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct ImportSession {
    pub phase: ImportPhase,
    pub file_name: Option<String>,
    pub job_id: Option<String>,
    pub progress: u8,
}

impl ImportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buttons and the file picker are locked while work is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, ImportPhase::Uploading | ImportPhase::Polling)
    }

    /// Poll cadence: fixed interval while polling, otherwise stop.
    pub fn poll_delay_ms(&self) -> Option<u32> {
        if self.phase == ImportPhase::Polling {
            Some(POLL_INTERVAL_MS)
        } else {
            None
        }
    }

    pub fn select_file(&mut self, name: String) {
        match self.phase {
            ImportPhase::Idle | ImportPhase::FileSelected | ImportPhase::Failed => {
                self.file_name = Some(name);
                self.phase = ImportPhase::FileSelected;
            }
            _ => {}
        }
    }

    pub fn start_upload(&mut self) -> StartUpload {
        match self.phase {
            ImportPhase::Idle => StartUpload::Rejected(ImportEffect::NotifyFailure {
                title: "Gagal upload".to_string(),
                body: "Pilih file terlebih dahulu".to_string(),
            }),
            ImportPhase::FileSelected => {
                self.phase = ImportPhase::Uploading;
                StartUpload::Begin
            }
            _ => StartUpload::Ignored,
        }
    }

    /// The server accepted the file and returned a job handle.
    pub fn upload_accepted(&mut self, job_id: String) -> Vec<ImportEffect> {
        if self.phase != ImportPhase::Uploading {
            return Vec::new();
        }
        self.phase = ImportPhase::Polling;
        self.job_id = Some(job_id);
        self.progress = 0;
        vec![ImportEffect::NotifySuccess {
            title: "Upload berhasil".to_string(),
            body: "Proses import sedang berjalan.".to_string(),
        }]
    }

    /// The upload request failed. The chosen file is kept so the user
    /// can retry without picking it again.
    pub fn upload_failed(&mut self, message: String) -> Vec<ImportEffect> {
        if self.phase != ImportPhase::Uploading {
            return Vec::new();
        }
        self.phase = ImportPhase::FileSelected;
        vec![ImportEffect::NotifyFailure {
            title: "Gagal upload".to_string(),
            body: message,
        }]
    }

    /// Reconcile a polled job snapshot into the session.
    ///
    /// Terminal statuses leave the `Polling` phase, so replaying the same
    /// snapshot afterwards produces no effects.
    pub fn apply_snapshot(&mut self, job: &ImportJob) -> Vec<ImportEffect> {
        if self.phase != ImportPhase::Polling {
            return Vec::new();
        }
        match job.status {
            JobStatus::Completed => {
                self.phase = ImportPhase::Completed;
                self.progress = 100;
                vec![
                    ImportEffect::InvalidateEmployees,
                    ImportEffect::NotifySuccess {
                        title: "Import selesai".to_string(),
                        body: "Data karyawan berhasil diimport.".to_string(),
                    },
                    ImportEffect::CloseModal,
                    ImportEffect::RefreshList,
                ]
            }
            JobStatus::Failed => {
                self.phase = ImportPhase::Failed;
                let body = job
                    .failed_reason
                    .clone()
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| "Terjadi kesalahan saat proses import.".to_string());
                vec![ImportEffect::NotifyFailure {
                    title: "Import gagal".to_string(),
                    body,
                }]
            }
            JobStatus::NotFound => {
                // Stale or expired job handle. The caller logs it; no toast.
                self.phase = ImportPhase::Failed;
                Vec::new()
            }
            JobStatus::Waiting | JobStatus::Active | JobStatus::Delayed | JobStatus::Paused => {
                self.progress = job.progress_percent();
                Vec::new()
            }
        }
    }

    /// The modal is going away. Every later event is inert.
    pub fn close(&mut self) {
        self.phase = ImportPhase::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(status: JobStatus) -> ImportJob {
        ImportJob {
            job_id: "job-1".to_string(),
            status,
            progress: None,
            result: None,
            failed_reason: None,
        }
    }

    fn snapshot_with_progress(status: JobStatus, progress: f64) -> ImportJob {
        ImportJob {
            progress: Some(progress),
            ..snapshot(status)
        }
    }

    fn running_session() -> ImportSession {
        let mut session = ImportSession::new();
        session.select_file("karyawan.csv".to_string());
        assert_eq!(session.start_upload(), StartUpload::Begin);
        let effects = session.upload_accepted("job-1".to_string());
        assert_eq!(effects.len(), 1);
        session
    }

    #[test]
    fn test_upload_requires_file() {
        let mut session = ImportSession::new();
        match session.start_upload() {
            StartUpload::Rejected(ImportEffect::NotifyFailure { body, .. }) => {
                assert_eq!(body, "Pilih file terlebih dahulu");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(session.phase, ImportPhase::Idle);
    }

    #[test]
    fn test_happy_path_full_run() {
        let mut session = ImportSession::new();
        session.select_file("karyawan.csv".to_string());
        assert_eq!(session.phase, ImportPhase::FileSelected);
        assert!(!session.is_busy());

        assert_eq!(session.start_upload(), StartUpload::Begin);
        assert!(session.is_busy());
        assert_eq!(session.poll_delay_ms(), None);

        let effects = session.upload_accepted("job-1".to_string());
        assert!(matches!(
            effects.as_slice(),
            [ImportEffect::NotifySuccess { .. }]
        ));
        assert_eq!(session.poll_delay_ms(), Some(POLL_INTERVAL_MS));

        // In-flight snapshots only move the progress bar.
        let effects = session.apply_snapshot(&snapshot_with_progress(JobStatus::Active, 40.0));
        assert!(effects.is_empty());
        assert_eq!(session.progress, 40);

        let effects = session.apply_snapshot(&snapshot(JobStatus::Completed));
        assert_eq!(
            effects,
            vec![
                ImportEffect::InvalidateEmployees,
                ImportEffect::NotifySuccess {
                    title: "Import selesai".to_string(),
                    body: "Data karyawan berhasil diimport.".to_string(),
                },
                ImportEffect::CloseModal,
                ImportEffect::RefreshList,
            ]
        );
        assert_eq!(session.phase, ImportPhase::Completed);
        assert_eq!(session.progress, 100);
        assert_eq!(session.poll_delay_ms(), None);
    }

    #[test]
    fn test_terminal_effects_fire_at_most_once() {
        let mut session = running_session();

        let first = session.apply_snapshot(&snapshot(JobStatus::Completed));
        assert_eq!(first.len(), 4);

        // A duplicate terminal snapshot must be silent.
        let second = session.apply_snapshot(&snapshot(JobStatus::Completed));
        assert!(second.is_empty());
        let third = session.apply_snapshot(&snapshot(JobStatus::Failed));
        assert!(third.is_empty());
    }

    #[test]
    fn test_failed_keeps_modal_open() {
        let mut session = running_session();

        let effects = session.apply_snapshot(&ImportJob {
            failed_reason: Some("Baris 3: umur tidak valid".to_string()),
            ..snapshot(JobStatus::Failed)
        });
        assert_eq!(
            effects,
            vec![ImportEffect::NotifyFailure {
                title: "Import gagal".to_string(),
                body: "Baris 3: umur tidak valid".to_string(),
            }]
        );
        // No CloseModal: the user stays in the dialog to retry.
        assert_eq!(session.phase, ImportPhase::Failed);
        assert_eq!(session.poll_delay_ms(), None);
    }

    #[test]
    fn test_failed_without_reason_uses_fallback() {
        let mut session = running_session();
        let effects = session.apply_snapshot(&snapshot(JobStatus::Failed));
        assert_eq!(
            effects,
            vec![ImportEffect::NotifyFailure {
                title: "Import gagal".to_string(),
                body: "Terjadi kesalahan saat proses import.".to_string(),
            }]
        );
    }

    #[test]
    fn test_not_found_stops_quietly() {
        let mut session = running_session();
        let effects = session.apply_snapshot(&snapshot(JobStatus::NotFound));
        assert!(effects.is_empty());
        assert_eq!(session.phase, ImportPhase::Failed);
        assert_eq!(session.poll_delay_ms(), None);
    }

    #[test]
    fn test_no_polling_without_job_handle() {
        let mut session = ImportSession::new();
        assert_eq!(session.poll_delay_ms(), None);
        session.select_file("karyawan.csv".to_string());
        assert_eq!(session.poll_delay_ms(), None);
        session.start_upload();
        assert_eq!(session.poll_delay_ms(), None);
        assert!(session.job_id.is_none());
    }

    #[test]
    fn test_upload_failure_keeps_file_for_retry() {
        let mut session = ImportSession::new();
        session.select_file("karyawan.csv".to_string());
        assert_eq!(session.start_upload(), StartUpload::Begin);

        let effects = session.upload_failed("Ukuran file terlalu besar".to_string());
        assert_eq!(
            effects,
            vec![ImportEffect::NotifyFailure {
                title: "Gagal upload".to_string(),
                body: "Ukuran file terlalu besar".to_string(),
            }]
        );
        assert_eq!(session.phase, ImportPhase::FileSelected);
        assert_eq!(session.file_name.as_deref(), Some("karyawan.csv"));

        // Retry works without re-selecting the file.
        assert_eq!(session.start_upload(), StartUpload::Begin);
    }

    #[test]
    fn test_close_makes_everything_inert() {
        let mut session = running_session();
        session.close();
        assert_eq!(session.phase, ImportPhase::Closed);
        assert_eq!(session.poll_delay_ms(), None);

        assert!(session.apply_snapshot(&snapshot(JobStatus::Completed)).is_empty());
        assert!(session.upload_accepted("job-2".to_string()).is_empty());
        assert!(session.upload_failed("x".to_string()).is_empty());
        assert_eq!(session.start_upload(), StartUpload::Ignored);

        session.select_file("lain.csv".to_string());
        assert_eq!(session.phase, ImportPhase::Closed);
    }

    #[test]
    fn test_close_during_upload_swallows_response() {
        let mut session = ImportSession::new();
        session.select_file("karyawan.csv".to_string());
        assert_eq!(session.start_upload(), StartUpload::Begin);

        session.close();
        // The in-flight response arrives after the modal is gone.
        assert!(session.upload_accepted("job-1".to_string()).is_empty());
        assert_eq!(session.poll_delay_ms(), None);
    }

    #[test]
    fn test_reselect_file_after_failure() {
        let mut session = running_session();
        session.apply_snapshot(&snapshot(JobStatus::Failed));

        session.select_file("perbaikan.csv".to_string());
        assert_eq!(session.phase, ImportPhase::FileSelected);
        assert_eq!(session.file_name.as_deref(), Some("perbaikan.csv"));
        assert_eq!(session.start_upload(), StartUpload::Begin);
    }

    #[test]
    fn test_file_selection_locked_while_busy() {
        let mut session = running_session();
        session.select_file("lain.csv".to_string());
        assert_eq!(session.file_name.as_deref(), Some("karyawan.csv"));
        assert_eq!(session.phase, ImportPhase::Polling);
    }

    #[test]
    fn test_double_start_is_ignored() {
        let mut session = ImportSession::new();
        session.select_file("karyawan.csv".to_string());
        assert_eq!(session.start_upload(), StartUpload::Begin);
        assert_eq!(session.start_upload(), StartUpload::Ignored);
    }

    #[test]
    fn test_progress_updates_for_queue_states() {
        let mut session = running_session();
        for status in [JobStatus::Waiting, JobStatus::Delayed, JobStatus::Paused] {
            let effects = session.apply_snapshot(&snapshot_with_progress(status, 15.0));
            assert!(effects.is_empty());
            assert_eq!(session.phase, ImportPhase::Polling);
        }
        assert_eq!(session.progress, 15);
    }
}
