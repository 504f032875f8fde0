use std::collections::HashMap;
use std::path::Path;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Extension, Json,
};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{PredictionResponse, RecommendationCriteria},
    services::recommendations,
    state::AppState,
};

/// Form part that must carry the uploaded photo
const IMAGE_FIELD: &str = "image";

/// Image extensions accepted on upload, compared case-insensitively
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Checks the uploaded image's filename.
///
/// `None` means no `image` part was sent at all; `Some("")` means the part
/// was sent without choosing a file.
pub fn validate_upload(filename: Option<&str>) -> AppResult<()> {
    let filename = filename
        .ok_or_else(|| AppError::InvalidInput("No image file provided".to_string()))?;

    if filename.trim().is_empty() {
        return Err(AppError::InvalidInput("No image file selected".to_string()));
    }

    let allowed = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        });

    if !allowed {
        return Err(AppError::InvalidInput(format!(
            "Invalid file type. Allowed types: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    Ok(())
}

/// Handler for the outfit prediction endpoint
///
/// The photo is only validated; recommendations come from the form fields.
pub async fn predict(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<PredictionResponse>> {
    let mut multipart = multipart.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let mut form = HashMap::new();
    let mut image_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == IMAGE_FIELD {
            image_name = Some(field.file_name().unwrap_or_default().to_string());
            let bytes = field.bytes().await?;
            tracing::debug!(request_id = %request_id, size = bytes.len(), "Image part received");
        } else {
            let value = field.text().await?;
            form.insert(name, value);
        }
    }

    validate_upload(image_name.as_deref())?;

    let criteria = RecommendationCriteria::from_form(&form);
    let prediction =
        recommendations::recommend(&state.catalog, state.ratings.as_ref(), &criteria).await;

    tracing::info!(
        request_id = %request_id,
        outfits = prediction.outfits.len(),
        "Prediction served"
    );

    Ok(Json(PredictionResponse::success(prediction)))
}
