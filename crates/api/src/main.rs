use std::fmt::Display;
use std::net::SocketAddr;
use std::sync::Arc;

use ahlam_core::credentials::{CredentialCheck, DenyAll, SharedSecret};
use ahlam_core::store::{MemoryStore, Store};
use ahlam_db::{LocalStore, PgStore};
use ahlam_notify::EmailNotifier;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ahlam_api::auth::password::{hash_password, Argon2Secret};
use ahlam_api::config::{AdminCredential, ServerConfig, StoreBackend};
use ahlam_api::router::build_app_router;
use ahlam_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ahlam_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // `ahlam-api hash-password` reads a password on stdin and prints the
    // PHC string to put in ADMIN_PASSWORD_HASH.
    if std::env::args().nth(1).as_deref() == Some("hash-password") {
        print_password_hash();
        return;
    }

    // --- Configuration ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| fatal("Invalid configuration", e));
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store ---
    let store = open_store(&config.store).await;

    // --- Notifications ---
    let notifier = Arc::new(EmailNotifier::from_env());

    // --- Admin credential ---
    let credentials: Arc<dyn CredentialCheck> = match &config.admin_credential {
        AdminCredential::Hash(hash) => Arc::new(
            Argon2Secret::new(hash.as_str())
                .unwrap_or_else(|e| fatal("ADMIN_PASSWORD_HASH is not a valid PHC string", e)),
        ),
        AdminCredential::Plain(secret) => Arc::new(SharedSecret::new(secret.as_str())),
        AdminCredential::None => {
            tracing::warn!("No admin password configured; admin login is disabled");
            Arc::new(DenyAll)
        }
    };

    let addr = SocketAddr::new(
        config
            .host
            .parse()
            .unwrap_or_else(|e| fatal("Invalid HOST address", e)),
        config.port,
    );

    // --- App ---
    let state = AppState::new(store, notifier, credentials, config);
    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| fatal("Failed to bind to address", e));

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        fatal("Server error", e);
    }

    tracing::info!("Graceful shutdown complete");
}

/// Open the configured backend. Any failure here is fatal.
async fn open_store(backend: &StoreBackend) -> Arc<dyn Store> {
    match backend {
        StoreBackend::Postgres { database_url } => {
            let pool = ahlam_db::create_pool(database_url)
                .await
                .unwrap_or_else(|e| fatal("Failed to connect to database", e));
            tracing::info!("Database connection pool created");

            ahlam_db::health_check(&pool)
                .await
                .unwrap_or_else(|e| fatal("Database health check failed", e));
            tracing::info!("Database health check passed");

            ahlam_db::run_migrations(&pool)
                .await
                .unwrap_or_else(|e| fatal("Failed to run database migrations", e));
            tracing::info!("Database migrations applied");

            Arc::new(PgStore::new(pool))
        }
        StoreBackend::Local { path } => {
            let store = LocalStore::open(path.clone())
                .await
                .unwrap_or_else(|e| fatal("Failed to open local store", e));
            tracing::info!(path = %path.display(), "Using local JSON store");
            Arc::new(store)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Arc::new(MemoryStore::seeded())
        }
    }
}

fn print_password_hash() {
    let mut password = String::new();
    if let Err(e) = std::io::stdin().read_line(&mut password) {
        fatal("Failed to read password from stdin", e);
    }
    let password = password.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        fatal("Password must not be empty", "empty input");
    }
    match hash_password(password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => fatal("Failed to hash password", e),
    }
}

/// Log a startup failure and exit.
fn fatal(context: &str, error: impl Display) -> ! {
    tracing::error!(error = %error, "{context}");
    std::process::exit(1);
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
