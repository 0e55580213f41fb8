use std::sync::Arc;

use anyhow::Result;
use log::info;

use stackbake::logger::init_env_logger;
use stackbake::todo::{build_router, config::TodoApiConfig, TodoStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TodoApiConfig::from_env()?;
    init_env_logger("info");

    let app = build_router(Arc::new(TodoStore::new()));

    let addr = config.addr()?;
    info!("Server running on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
