use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::Site;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let site = Arc::new(Site::from_config(cfg)?);
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!(
        root = %site.files.document_root().display(),
        "Listening on {}", cfg.listen_addr
    );

    serve(listener, site).await
}

/// Accepts connections forever, one task each.
///
/// A failed accept is logged and the loop carries on.
pub async fn serve(listener: TcpListener, site: Arc<Site>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!("Accept failed: {}", e);
                continue;
            }
        };
        tracing::debug!("Accepted connection from {}", peer);

        let site = Arc::clone(&site);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, site);
            if let Err(e) = conn.run().await {
                tracing::warn!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
