//! Print-job operations: creation, lookup, staff mutations, deletion.

use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::alert::Outcome;
use crate::api::{ApiClient, ApiError, ApiResult};
use crate::schema::{
    CreatedJob, Customer, JobListResponse, JobStatus, PaperSize, PrintFile, PrintJob,
};

/// One file of an order, with its options already resolved (shared default
/// or per-file) at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionFile {
    pub name: String,
    /// Local path the upload bytes are read from.
    pub path: PathBuf,
    pub size_mb: f64,
    pub copies: u32,
    pub is_colored: bool,
    pub paper_size: PaperSize,
    pub notes: Option<String>,
}

/// A fully resolved order, ready to become one multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub customer: Customer,
    pub files: Vec<SubmissionFile>,
}

/// Builds the single multipart request for job creation: customer fields
/// plus, per file, the binary and its print options under indexed keys.
async fn build_multipart(submission: &OrderSubmission) -> std::io::Result<Form> {
    let mut form = Form::new()
        .text("customer.name", submission.customer.name.clone())
        .text("customer.email", submission.customer.email.clone());
    if let Some(phone) = &submission.customer.phone_number {
        form = form.text("customer.phoneNumber", phone.clone());
    }

    for (index, file) in submission.files.iter().enumerate() {
        let bytes = tokio::fs::read(&file.path).await?;
        let mime = mime_guess::from_path(&file.name).first_or_octet_stream();
        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(mime.as_ref())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        form = form
            .part(format!("printFiles[{index}].file"), part)
            .text(format!("printFiles[{index}].name"), file.name.clone())
            .text(format!("printFiles[{index}].copies"), file.copies.to_string())
            .text(
                format!("printFiles[{index}].isColored"),
                file.is_colored.to_string(),
            )
            .text(
                format!("printFiles[{index}].paperSize"),
                file.paper_size.to_string(),
            )
            .text(
                format!("printFiles[{index}].fileSizeMB"),
                format!("{:.2}", file.size_mb),
            );
        if let Some(notes) = &file.notes {
            form = form.text(format!("printFiles[{index}].notes"), notes.clone());
        }
    }

    Ok(form)
}

/// Submits a new print job as one atomic multipart request.
pub async fn create_print_job(
    client: &ApiClient,
    submission: &OrderSubmission,
) -> Outcome<CreatedJob> {
    let form = match build_multipart(submission).await {
        Ok(form) => form,
        Err(e) => {
            return Outcome::error("Create Failed", format!("Failed to read upload: {}", e));
        }
    };

    debug!(
        files = submission.files.len(),
        "Submitting print job creation"
    );

    let response = match client.post("/api/printjob/create").multipart(form).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Print job submission failed: {}", e);
            return Outcome::error(
                "Network Error",
                "An error occurred while submitting the form.",
            );
        }
    };

    match ApiClient::expect_success(response).await {
        Ok(response) => match response.json::<CreatedJob>().await {
            Ok(created) => {
                info!(reference_code = %created.reference_code, "Print job created");
                let code = created.reference_code.clone();
                Outcome::success(
                    "Print Job Created",
                    format!(
                        "Print job created successfully! Reference code: {}",
                        created.reference_code
                    ),
                )
                .with_reference_code(code)
                .with_data(created)
            }
            Err(e) => Outcome::error(
                "Create Failed",
                format!("Failed to decode creation response: {}", e),
            ),
        },
        Err(err) => Outcome::error(
            "Create Failed",
            format!("Failed to create print job: {}", err.detail()),
        ),
    }
}

/// Fetches a job by reference code, keeping the error variants raw so
/// callers can tell not-found from transport failure.
pub async fn lookup_reference_code(client: &ApiClient, code: &str) -> ApiResult<PrintJob> {
    client
        .get_json::<PrintJob>(&format!("/api/printjob/status/{code}"))
        .await
}

/// Looks up a job by its customer-facing reference code.
///
/// The three failure modes stay distinguishable: missing code (no request
/// sent), not-found, and network/backend failure.
pub async fn check_reference_code(client: &ApiClient, reference_code: &str) -> Outcome<PrintJob> {
    let code = reference_code.trim();
    if code.is_empty() {
        return Outcome::error("Missing Reference Code", "Reference code is required.");
    }

    match lookup_reference_code(client, code).await {
        Ok(job) => Outcome::success(
            "Print Job Found",
            format!("Print job with reference code {code} was found."),
        )
        .with_reference_code(code)
        .with_data(job),
        Err(ApiError::NotFound) => Outcome::error(
            "Not Found",
            "Print job not found. Please check your reference code.",
        ),
        Err(ApiError::Network(e)) => {
            warn!("Reference code lookup failed: {}", e);
            Outcome::error(
                "Network Error",
                "An error occurred while checking the status.",
            )
        }
        Err(err) => Outcome::error(
            "Request Failed",
            format!("Error fetching print job: {}", err.detail()),
        ),
    }
}

/// Loads all jobs for the admin dashboard.
pub async fn list_print_jobs(client: &ApiClient) -> ApiResult<Vec<PrintJob>> {
    let response: JobListResponse = client.get_json("/api/printjob").await?;
    Ok(response.data)
}

/// Loads one job by internal id.
pub async fn get_print_job(client: &ApiClient, job_id: i64) -> ApiResult<PrintJob> {
    client.get_json(&format!("/api/printjob/{job_id}")).await
}

/// Staff mutation discriminator, mirroring the submitted `_intent` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateIntent {
    Status(JobStatus),
    Pay,
    Download { file_id: i64 },
}

impl UpdateIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateIntent::Status(_) => "status",
            UpdateIntent::Pay => "payment",
            UpdateIntent::Download { .. } => "download",
        }
    }
}

/// The record returned by a staff mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpdatedRecord {
    Job(PrintJob),
    File(PrintFile),
}

async fn put_expect_json<T: serde::de::DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    body: Option<serde_json::Value>,
) -> ApiResult<T> {
    let mut builder = client.put(path);
    if let Some(body) = body {
        builder = builder.json(&body);
    }
    let response = ApiClient::send(builder).await?;
    response.json::<T>().await.map_err(ApiError::from)
}

fn update_outcome<T>(result: ApiResult<T>, intent: &UpdateIntent) -> Outcome<T> {
    match result {
        Ok(data) => Outcome::success(
            "Update Successful",
            format!("Print job {} update completed successfully.", intent.as_str()),
        )
        .with_data(data),
        Err(err) => Outcome::error("Update Failed", err.detail()),
    }
}

/// Sets a job's lifecycle status. The body is the raw status string.
pub async fn update_status(client: &ApiClient, job_id: i64, status: JobStatus) -> Outcome<PrintJob> {
    let result = put_expect_json(
        client,
        &format!("/api/printjob/{job_id}/status"),
        Some(json!(status.as_str())),
    )
    .await;
    update_outcome(result, &UpdateIntent::Status(status))
}

/// Marks a job as paid.
pub async fn mark_paid(client: &ApiClient, job_id: i64) -> Outcome<PrintJob> {
    let result = put_expect_json(client, &format!("/api/printjob/{job_id}/pay"), None).await;
    update_outcome(result, &UpdateIntent::Pay)
}

/// Records that a paid file has been fetched.
pub async fn mark_file_downloaded(client: &ApiClient, file_id: i64) -> Outcome<PrintFile> {
    let result =
        put_expect_json(client, &format!("/api/printfile/{file_id}/downloaded"), None).await;
    update_outcome(result, &UpdateIntent::Download { file_id })
}

/// As [`mark_file_downloaded`], gated on the owning job. An unpaid job
/// yields a warning outcome with no request sent.
pub async fn mark_file_downloaded_for(
    client: &ApiClient,
    job: &PrintJob,
    file_id: i64,
) -> Outcome<PrintFile> {
    if !job.can_download() {
        return Outcome::warning(
            "Payment Required",
            "Files can be downloaded only after the job is paid.",
        );
    }
    mark_file_downloaded(client, file_id).await
}

/// Dispatches one staff mutation by intent.
pub async fn apply_update(
    client: &ApiClient,
    job_id: i64,
    intent: UpdateIntent,
) -> Outcome<UpdatedRecord> {
    match intent {
        UpdateIntent::Status(status) => {
            let outcome = update_status(client, job_id, status).await;
            Outcome {
                alert: outcome.alert,
                data: outcome.data.map(UpdatedRecord::Job),
                reference_code: outcome.reference_code,
            }
        }
        UpdateIntent::Pay => {
            let outcome = mark_paid(client, job_id).await;
            Outcome {
                alert: outcome.alert,
                data: outcome.data.map(UpdatedRecord::Job),
                reference_code: outcome.reference_code,
            }
        }
        UpdateIntent::Download { file_id } => {
            let outcome = mark_file_downloaded(client, file_id).await;
            Outcome {
                alert: outcome.alert,
                data: outcome.data.map(UpdatedRecord::File),
                reference_code: outcome.reference_code,
            }
        }
    }
}

/// Deletes one job. Staff-only; customers can only cancel.
pub async fn delete_print_job(client: &ApiClient, job_id: i64) -> Outcome<()> {
    match ApiClient::send(client.delete(&format!("/api/printjob/{job_id}"))).await {
        Ok(_) => Outcome::success(
            "Job Deleted",
            format!("Print job {job_id} has been deleted successfully."),
        ),
        Err(err) => Outcome::error(
            "Delete Failed",
            failure_description(&err, "Failed to delete the print job. Please try again."),
        ),
    }
}

/// Deletes a batch of jobs in one request.
pub async fn bulk_delete(client: &ApiClient, job_ids: &[i64]) -> Outcome<()> {
    let result = ApiClient::send(
        client
            .delete("/api/printjob/bulk-delete")
            .json(&json!({ "jobIds": job_ids })),
    )
    .await;

    match result {
        Ok(_) => Outcome::success(
            "Jobs Deleted",
            format!(
                "{} job{} deleted successfully.",
                job_ids.len(),
                if job_ids.len() > 1 { "s" } else { "" }
            ),
        ),
        Err(err) => Outcome::error(
            "Bulk Delete Failed",
            failure_description(&err, "Failed to delete selected jobs. Please try again."),
        ),
    }
}

fn failure_description(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Network(_) => fallback.to_string(),
        other => other.detail(),
    }
}
