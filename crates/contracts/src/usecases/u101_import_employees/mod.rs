pub mod job;

pub use job::{ImportJob, JobStatus, UploadAccepted};

use crate::usecases::common::UseCaseMetadata;

pub struct ImportEmployees;

impl UseCaseMetadata for ImportEmployees {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "import_employees"
    }

    fn display_name() -> &'static str {
        "Import Karyawan"
    }
}
