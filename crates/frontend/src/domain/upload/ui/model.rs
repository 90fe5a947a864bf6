//! HTTP calls for the upload endpoints.

use crate::shared::api_utils::api_url;
use contracts::upload::{BatchUploadResponse, UploadResponse};
use gloo_net::http::Request;
use web_sys::FormData;

fn form_with_files(field: &str, files: &[web_sys::File]) -> Result<FormData, String> {
    let form = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    for file in files {
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|_| "Failed to attach file".to_string())?;
    }
    Ok(form)
}

/// `POST /upload` with a single `file` field.
pub async fn upload_file(file: &web_sys::File) -> Result<UploadResponse, String> {
    let form = form_with_files("file", std::slice::from_ref(file))?;

    let response = Request::post(&api_url("/upload"))
        .body(form)
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Upload failed: {}", response.status_text()));
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| format!("Invalid response: {}", e))
}

/// `POST /upload/batch` with every file attached under the repeated
/// `files` field. One request regardless of file count.
pub async fn upload_batch(files: &[web_sys::File]) -> Result<BatchUploadResponse, String> {
    let form = form_with_files("files", files)?;

    let response = Request::post(&api_url("/upload/batch"))
        .body(form)
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Batch upload failed: {}", response.status_text()));
    }

    response
        .json::<BatchUploadResponse>()
        .await
        .map_err(|e| format!("Invalid response: {}", e))
}

/// `DELETE /upload/clear`. Only the status code matters.
pub async fn clear_uploads() -> Result<(), String> {
    let response = Request::delete(&api_url("/upload/clear"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Clear failed: {}", response.status_text()));
    }
    Ok(())
}
