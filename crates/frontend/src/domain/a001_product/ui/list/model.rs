use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a001_product::catalog::{SyncCommand, SyncOutcome};
use contracts::shared::sync::SyncError;
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

const PRODUCTS_PATH: &str = "/products";

fn network_error(e: gloo_net::Error) -> SyncError {
    SyncError::Network(e.to_string())
}

fn check_status(response: &Response) -> Result<(), SyncError> {
    match SyncError::from_status(response.status()) {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// GET /products
pub async fn fetch_all() -> Result<Vec<Product>, SyncError> {
    let response = Request::get(&api_url(PRODUCTS_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network_error)?;
    check_status(&response)?;
    response
        .json()
        .await
        .map_err(|e| SyncError::Decode(e.to_string()))
}

/// POST /products. The response body is not used.
pub async fn create(product: &Product) -> Result<(), SyncError> {
    let response = Request::post(&api_url(PRODUCTS_PATH))
        .json(product)
        .map_err(|e| SyncError::Request(e.to_string()))?
        .send()
        .await
        .map_err(network_error)?;
    check_status(&response)
}

/// DELETE /products/:id
pub async fn delete(id: ProductId) -> Result<(), SyncError> {
    let response = Request::delete(&api_url(&format!("{}/{}", PRODUCTS_PATH, id)))
        .send()
        .await
        .map_err(network_error)?;
    check_status(&response)
}

/// Send the request a catalog command asks for
pub async fn execute(command: SyncCommand) -> SyncOutcome {
    match command {
        SyncCommand::Fetch => SyncOutcome::Fetched(fetch_all().await),
        SyncCommand::Create(product) => {
            let result = create(&product).await;
            SyncOutcome::Created { product, result }
        }
        SyncCommand::Delete { id, removed } => SyncOutcome::Deleted {
            id,
            removed,
            result: delete(id).await,
        },
    }
}
