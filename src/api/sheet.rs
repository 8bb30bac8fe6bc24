//! `POST /sheet`.

use axum::{extract::State, http::StatusCode, Json};

use crate::http::error::ApiError;
use crate::http::extract::ValidJson;
use crate::http::server::AppState;
use crate::sheet::{CreateSheetRequest, CreateSheetResponse, IdSheet};

pub async fn create_sheet(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateSheetRequest>,
) -> Result<(StatusCode, Json<CreateSheetResponse>), ApiError> {
    let sheet = IdSheet::try_from(request)?;
    let elapsed = state.sheets.write(&sheet).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSheetResponse {
            message: format!("created in {:.2}s", elapsed.as_secs_f64()),
        }),
    ))
}
