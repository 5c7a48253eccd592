use movies_info_service::movies::handlers::router;
use movies_info_service::movies::repository::InMemoryMovieInfoRepository;
use movies_info_service::movies::service::MoviesInfoService;
use movies_info_service::streams;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8080".parse()?;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Storage and orchestration:
    let repository = Arc::new(InMemoryMovieInfoRepository::new());
    let service = Arc::new(MoviesInfoService::new(repository));

    // 2. HTTP Router:
    let app = router(service).merge(streams::handlers::router());

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
