use anyhow::Result;
use kawaraban::application::{
    ports::{
        image_store::ImageStore,
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use kawaraban::config::AppConfig;
use kawaraban::domain::{
    author::AuthorRepository, category::CategoryRepository, comment::CommentRepository,
    post::PostRepository,
};
use kawaraban::infrastructure::{
    database,
    images::FsImageStore,
    repositories::{
        SqliteAuthorRepository, SqliteCategoryRepository, SqliteCommentRepository,
        SqlitePostRepository,
    },
    time::SystemClock,
    util::WhitespaceSlugGenerator,
};
use kawaraban::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let post_repo: Arc<dyn PostRepository> = Arc::new(SqlitePostRepository::new(pool.clone()));
    let author_repo: Arc<dyn AuthorRepository> =
        Arc::new(SqliteAuthorRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(SqliteCommentRepository::new(pool.clone()));

    let images: Arc<dyn ImageStore> = Arc::new(FsImageStore::new(config.uploads_dir()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(WhitespaceSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        post_repo,
        author_repo,
        category_repo,
        comment_repo,
        images,
        clock,
        slugger,
        config.page_size(),
        config.comment_blocklist().to_vec(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
