use contracts::domain::a001_product::aggregate::{Product, ProductId};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Product {0} not found")]
    NotFound(ProductId),

    #[error("Product {0} already exists")]
    AlreadyExists(ProductId),
}

/// In-memory product collection shared by all request handlers.
/// Products keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct ProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    pub async fn list_all(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    pub async fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::AlreadyExists(product.id));
        }
        products.push(product.clone());
        Ok(product)
    }

    pub async fn delete(&self, id: ProductId) -> Result<Product, StoreError> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(products.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }
}
