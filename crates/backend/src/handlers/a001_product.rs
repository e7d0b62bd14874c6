use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use serde_json::json;

use crate::domain::a001_product::repository::{ProductRepository, StoreError};

fn status_of(error: &StoreError) -> StatusCode {
    match error {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::AlreadyExists(_) => StatusCode::CONFLICT,
    }
}

/// GET /products
pub async fn list_all(State(repo): State<ProductRepository>) -> Json<Vec<Product>> {
    Json(repo.list_all().await)
}

/// GET /products/:id
pub async fn get_by_id(
    State(repo): State<ProductRepository>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, StatusCode> {
    repo.get_by_id(id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// POST /products
pub async fn create(
    State(repo): State<ProductRepository>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<Product>), StatusCode> {
    match repo.insert(product).await {
        Ok(product) => {
            tracing::info!("Created product {}", product.id);
            Ok((StatusCode::CREATED, Json(product)))
        }
        Err(e) => {
            tracing::warn!("Create rejected: {}", e);
            Err(status_of(&e))
        }
    }
}

/// DELETE /products/:id
pub async fn delete(
    State(repo): State<ProductRepository>,
    Path(id): Path<ProductId>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match repo.delete(id).await {
        Ok(_) => {
            tracing::info!("Deleted product {}", id);
            Ok(Json(json!({})))
        }
        Err(e) => {
            tracing::warn!("Delete rejected: {}", e);
            Err(status_of(&e))
        }
    }
}
