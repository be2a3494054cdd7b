use anyhow::Result;
use car_rest_api::application::{
    ports::{i18n::Locale, security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use car_rest_api::config::AppConfig;
use car_rest_api::domain::car::CarRepository;
use car_rest_api::infrastructure::{
    database, i18n::BundledMessageCatalog, repositories::SqliteCarRepository,
    security::token::BiscuitTokenManager, time::SystemClock,
};
use car_rest_api::presentation::http::{
    routes::build_router,
    state::{HttpState, PagingDefaults},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let car_repo: Arc<dyn CarRepository> = Arc::new(SqliteCarRepository::new(Arc::clone(&pool)));
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(car_repo, token_manager, clock));

    let default_locale = Locale::new(config.default_locale());
    let messages = Arc::new(BundledMessageCatalog::new(default_locale.clone())?);
    if !messages.supports(&default_locale) {
        tracing::warn!(locale = %default_locale, "no message bundle for default locale");
    }

    let state = HttpState {
        services,
        messages,
        default_locale,
        paging: PagingDefaults {
            default_size: config.page_size_default(),
            max_size: config.page_size_max(),
        },
    };

    let app = build_router(state, config.allowed_origins());

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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
