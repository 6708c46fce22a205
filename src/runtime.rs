//! Runtime services and shared state for the jira-bridge.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{debug, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    server,
    service::{chat::ChatClient, dedup::DedupStore, tracker::TrackerClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration and every service client. It is
/// designed to be trivially cloneable, allowing it to be passed around
/// (including as axum state) without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The issue tracker client instance.
    pub tracker: TrackerClient,
    /// The chat client instance.
    pub chat: ChatClient,
    /// The store of already-handled event ids.
    pub dedup: DedupStore,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the tracker client.
        let tracker = TrackerClient::jira(&config);

        // Initialize the slack client.
        let chat = ChatClient::slack(&config)?;

        // Initialize the dedup store.
        let dedup = DedupStore::memory(config.dedup_ttl());

        Ok(Self { config, tracker, chat, dedup })
    }

    /// Serve the webhook until Ctrl-C.
    pub async fn start(&self) -> Void {
        self.spawn_dedup_pruning();

        let addr: SocketAddr = format!("{}:{}", self.config.listen_host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        info!("Listening for Slack events on http://{}{}", addr, self.config.events_path);

        axum::serve(listener, server::build_router(self.clone()))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                info!("Shutting down ...");
            })
            .await?;

        Ok(())
    }

    /// Periodically drop expired event ids so the store stays bounded.
    fn spawn_dedup_pruning(&self) {
        let dedup = self.dedup.clone();
        let period = self.config.dedup_ttl();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);

            loop {
                interval.tick().await;
                dedup.prune();
                debug!("Dedup store holds {} event ids.", dedup.len());
            }
        });
    }
}
