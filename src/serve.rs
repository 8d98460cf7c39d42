//! Static file server for a page and its WASM bundle.
//!
//! Serves a web root directory over HTTP until the shutdown future resolves. Local development
//! only; no live reload.

use crate::error::NavError;
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{
    future::Future,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 5173;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeConfig {
    pub web_root: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        ServeConfig {
            web_root: PathBuf::from("."),
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServeConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

pub struct StaticServer {
    config: ServeConfig,
}

impl StaticServer {
    pub fn new(config: ServeConfig) -> Result<Self, NavError> {
        if !config.web_root.is_dir() {
            return Err(NavError::NotFound(format!(
                "web root {} is not a directory",
                config.web_root.display()
            )));
        }
        Ok(StaticServer { config })
    }

    pub fn router(&self) -> Router {
        Router::new()
            .fallback_service(ServeDir::new(&self.config.web_root))
            .layer(TraceLayer::new_for_http())
    }

    /// Runs until `shutdown_signal` resolves.
    pub async fn serve(
        self,
        shutdown_signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), NavError> {
        let addr = self.config.addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| NavError::Service(format!("could not bind {addr}: {e}")))?;

        tracing::info!(
            "Serving {} at http://{}",
            self.config.web_root.display(),
            addr
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| NavError::Service(format!("server error: {e}")))?;

        tracing::info!("Server on {} stopped", addr);
        Ok(())
    }
}
