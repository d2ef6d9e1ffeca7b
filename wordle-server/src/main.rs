use std::sync::Arc;

use tokio::signal;
use tracing::info;

use wordle_persistence::{
    GameRepository, KeyValueStore, MemoryStore, RandomPicker, SystemClock, WordSelector,
};
use wordle_server::word_source::ContentWordSource;
use wordle_server::{config::Config, create_routes, game_manager::GameService};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting wordle server...");

    let config = Config::new();
    info!(
        "Serving word list from {}/{}",
        config.words_repo, config.words_path
    );

    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let word_source = Arc::new(ContentWordSource::new(&config));
    let clock = Arc::new(SystemClock);

    let selector = WordSelector::new(
        store.clone(),
        word_source,
        clock.clone(),
        Arc::new(RandomPicker),
    );
    let repository = GameRepository::new(store, selector, clock.clone());
    let service = Arc::new(GameService::new(repository, clock));

    let routes = create_routes(service);

    let addr = (
        config.host.parse::<std::net::IpAddr>().expect("Invalid HOST"),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!("Server started on {}. Press Ctrl+C to stop.", addr);
    server.await;
    info!("Server shutdown complete.");
}
