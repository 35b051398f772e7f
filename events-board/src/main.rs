use std::{env, io};

use chrono::Utc;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use events_board::{cli, router, Board};
use events_core::{sample_drafts, EventStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    let mut store = EventStore::new();
    if args.seed {
        for draft in sample_drafts(Utc::now().date_naive()) {
            if let Err(err) = store.add(draft) {
                warn!(%err, "Skipping sample event");
            }
        }
        info!(count = store.len(), "Seeded sample events");
    }

    let router = router(Board::new(args.name, store));

    let listener = TcpListener::bind(args.address).await?;
    info!("Listening at http://{}", args.address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("events_board=info,events_core=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(%err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
