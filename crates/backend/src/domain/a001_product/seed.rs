//! Initial products loaded at startup from a json-server style file.

use contracts::domain::a001_product::aggregate::Product;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedFile {
    Database { products: Vec<Product> },
    List(Vec<Product>),
}

/// Parse either `{ "products": [...] }` or a bare array of products
pub fn parse_seed(contents: &str) -> anyhow::Result<Vec<Product>> {
    let seed: SeedFile = serde_json::from_str(contents)
        .map_err(|e| anyhow::anyhow!("Invalid seed file: {e}"))?;
    Ok(match seed {
        SeedFile::Database { products } | SeedFile::List(products) => products,
    })
}

/// Load seed products; a missing file yields an empty collection
pub async fn load_seed(path: &Path) -> anyhow::Result<Vec<Product>> {
    if !path.exists() {
        tracing::warn!("Seed file not found at {}, starting empty", path.display());
        return Ok(Vec::new());
    }
    let contents = tokio::fs::read_to_string(path).await?;
    let products = parse_seed(&contents)?;
    tracing::info!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}
