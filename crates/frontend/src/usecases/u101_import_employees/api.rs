use contracts::shared::api::normalize_error_body;
use contracts::usecases::u101_import_employees::{ImportJob, UploadAccepted};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::api_url;

/// Upload a CSV file and receive a job handle.
///
/// The body is multipart/form-data with the file under the `file` field.
/// The Content-Type header is left for the browser to fill in, so the
/// multipart boundary is set correctly.
pub async fn upload_csv(file: web_sys::File, token: &str) -> Result<UploadAccepted, String> {
    let form_data = FormData::new().map_err(|e| format!("Failed to build form data: {:?}", e))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;

    let response = Request::post(&api_url("/employee/import"))
        .header("Authorization", &format!("Bearer {}", token))
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(normalize_error_body(status, &body));
    }

    response
        .json::<UploadAccepted>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the current snapshot of an import job.
pub async fn get_progress(job_id: &str, token: &str) -> Result<ImportJob, String> {
    let url = api_url(&format!("/employee/import/{}/progress", job_id));

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(normalize_error_body(status, &body));
    }

    response
        .json::<ImportJob>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
