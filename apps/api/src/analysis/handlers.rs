//! Axum route handlers for the scan API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::analysis::normalize::normalize;
use crate::analysis::report::{build, PresentableReport, DEFAULT_MISSING_LIMIT};
use crate::analysis::scoring::score;
use crate::errors::AppError;
use crate::extraction::{extract, Document};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PresetListResponse {
    pub profiles: Vec<String>,
}

/// GET /api/v1/presets
///
/// Lists the built-in job profile keys for the UI's selection box.
pub async fn handle_list_presets(State(state): State<AppState>) -> Json<PresetListResponse> {
    Json(PresetListResponse {
        profiles: state.presets.names().iter().map(|s| s.to_string()).collect(),
    })
}

/// Fields accepted by the scan endpoint, accumulated while draining the
/// multipart stream.
#[derive(Default)]
struct ScanFields {
    resume: Option<Document>,
    profile: Option<String>,
    jd: Option<Document>,
    limit: Option<usize>,
}

/// POST /api/v1/scan
///
/// Multipart: `resume` file (required) plus exactly one of `profile`
/// (preset key) or `jd` (custom JD file). Optional `limit` caps the
/// missing-keyword list.
pub async fn handle_scan(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PresentableReport>, AppError> {
    let fields = read_scan_fields(multipart).await?;

    let resume = fields
        .resume
        .ok_or_else(|| AppError::Validation("missing 'resume' file field".to_string()))?;

    let jd_text = match (fields.profile, fields.jd) {
        (Some(key), None) => state.presets.resolve(&key)?.keywords.clone(),
        (None, Some(document)) => extract(&document)?,
        (Some(_), Some(_)) => {
            return Err(AppError::Validation(
                "provide either 'profile' or 'jd', not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(AppError::Validation(
                "provide a 'profile' key or a 'jd' file".to_string(),
            ))
        }
    };

    let resume_text = extract(&resume)?;

    let resume_words = normalize(&resume_text);
    let jd_words = normalize(&jd_text);
    let match_report = score(&resume_words, &jd_words);

    info!(
        score = match_report.score,
        matched = match_report.matched.len(),
        missing = match_report.missing.len(),
        resume = %resume.filename,
        "scan complete"
    );

    Ok(Json(build(
        &match_report,
        fields.limit.unwrap_or(DEFAULT_MISSING_LIMIT),
    )))
}

async fn read_scan_fields(mut multipart: Multipart) -> Result<ScanFields, AppError> {
    let mut fields = ScanFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" | "jd" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                if filename.is_empty() {
                    return Err(AppError::Validation(format!(
                        "field '{name}' must be a file upload with a filename"
                    )));
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read '{name}': {e}")))?;
                let document = Document::new(filename, bytes);
                if name == "resume" {
                    fields.resume = Some(document);
                } else {
                    fields.jd = Some(document);
                }
            }
            "profile" => {
                let key = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read 'profile': {e}")))?;
                fields.profile = Some(key);
            }
            "limit" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read 'limit': {e}")))?;
                let parsed = raw.trim().parse::<usize>().map_err(|_| {
                    AppError::Validation("limit must be a non-negative integer".to_string())
                })?;
                fields.limit = Some(parsed);
            }
            other => {
                return Err(AppError::Validation(format!(
                    "unexpected multipart field '{other}'"
                )));
            }
        }
    }

    Ok(fields)
}
