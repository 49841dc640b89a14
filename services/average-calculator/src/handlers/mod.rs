use crate::error::AppError;

pub mod numbers;

pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".into())
}
