pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use domain::a001_product::{repository::ProductRepository, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    let products = match shared::config::get_seed_path(&config) {
        Some(path) => seed::load_seed(&path).await?,
        None => Vec::new(),
    };
    let repo = ProductRepository::new(products);
    tracing::info!("Product store ready with {} products", repo.len().await);

    let app = routes::configure_routes(repo);

    let addr = config.socket_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server listening on http://{}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
