//! Axum route handlers for the cover-letter API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::letter::style::{style_catalog, StyleCatalog};
use crate::models::request::{is_blank, GenerationRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LetterResponse {
    pub letter: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-cover-letter
///
/// Runs one generation. Failures, including unreadable bodies, come back as
/// `{ "error": ... }` with the gateway's status code.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<LetterResponse>, AppError> {
    let Json(request) = payload?;
    let letter = state.gateway.generate(&request).await?;
    Ok(Json(LetterResponse { letter }))
}

/// GET /api/cover-letter/options
///
/// Template, tone and length choices for the form's pickers.
pub async fn handle_options() -> Json<StyleCatalog> {
    Json(style_catalog())
}

/// POST /api/cover-letter/download
///
/// Echoes the (possibly edited) letter back as a plain-text attachment.
pub async fn handle_download(
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    if is_blank(&request.letter) {
        return Err(AppError::Validation("letter cannot be empty".to_string()));
    }

    let disposition = format!(
        "attachment; filename=\"{}\"",
        download_filename(&request.company_name)
    );
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid Content-Disposition: {e}")))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        request.letter,
    )
        .into_response())
}

/// `cover-letter-<company>.txt`, with the company reduced to a header-safe slug.
pub fn download_filename(company_name: &str) -> String {
    let slug: String = company_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if slug.is_empty() {
        "cover-letter.txt".to_string()
    } else {
        format!("cover-letter-{slug}.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_filename_slugs_company() {
        assert_eq!(download_filename("Acme"), "cover-letter-Acme.txt");
        assert_eq!(
            download_filename("  Wayne   Enterprises "),
            "cover-letter-Wayne-Enterprises.txt"
        );
        assert_eq!(
            download_filename("Ben & Jerry's \"Ice\""),
            "cover-letter-Ben--Jerrys-Ice.txt"
        );
    }

    #[test]
    fn test_download_filename_without_usable_company() {
        assert_eq!(download_filename(""), "cover-letter.txt");
        assert_eq!(download_filename("Überstadt/©"), "cover-letter-berstadt.txt");
        assert_eq!(download_filename("日本"), "cover-letter.txt");
    }
}
