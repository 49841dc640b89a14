use crate::error::AppError;
use crate::models::NumbersResponse;
use crate::source::SourceId;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

pub async fn get_numbers(
    State(state): State<AppState>,
    Path(number_id): Path<String>,
) -> Result<Json<NumbersResponse>, AppError> {
    let source: SourceId = number_id
        .parse()
        .map_err(|_| AppError::InvalidType)?;

    // Upstream failures degrade to an empty batch
    let numbers = match state.number_source.fetch(source).await {
        Ok(numbers) => numbers,
        Err(e) => {
            tracing::warn!(source = %source, error = %e, "Number fetch failed");
            Vec::new()
        }
    };

    let (result, avg) = state.merge_and_average(numbers).await;
    tracing::debug!(
        source = %source,
        window_len = result.curr_state.len(),
        avg,
        "Window merged"
    );

    Ok(Json(NumbersResponse::new(result, avg)))
}
