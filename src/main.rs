use anyhow::{Context, Result, bail};
use folio_core::application::{
    identity::IdentityGate,
    ports::{
        identity::IdentityProvider, renderer::ContentRenderer, security::PasswordHasher,
        storage::KeyValueStore, time::Clock, util::SlugGenerator,
    },
    services::ApplicationServices,
};
use folio_core::config::{AppConfig, StorageBackend};
use folio_core::domain::{article::ArticleRepository, subscriber::SubscriberRepository};
use folio_core::infrastructure::{
    rendering::SanitizingMarkdownRenderer,
    repositories::{StoredArticleRepository, StoredSubscriberRepository},
    security::{
        identity::{AdminAccount, LocalIdentityProvider},
        password::Argon2PasswordHasher,
    },
    storage::{FileStore, JsonStorage, MemoryStore},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None | Some("serve") => bootstrap().await,
        Some("hash-password") => {
            let Some(password) = args.next() else {
                bail!("usage: folio_core hash-password <password>");
            };
            let hash = Argon2PasswordHasher.hash(&password).await?;
            println!("{hash}");
            Ok(())
        }
        Some(other) => bail!("unknown command `{other}`; expected `serve` or `hash-password`"),
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn KeyValueStore> = match config.storage_backend() {
        StorageBackend::File => {
            let store = FileStore::open(config.storage_dir())
                .with_context(|| format!("opening storage at {}", config.storage_dir().display()))?;
            tracing::info!(root = %store.root().display(), "using file storage");
            Arc::new(store)
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; nothing survives a restart");
            Arc::new(MemoryStore::new())
        }
    };
    let storage = JsonStorage::new(store);

    let articles = Arc::new(StoredArticleRepository::new(storage.clone()));
    if config.seed_articles() && articles.seed_if_missing()? {
        tracing::info!("article store was empty; wrote sample articles");
    }
    let article_repo: Arc<dyn ArticleRepository> = articles;
    let subscriber_repo: Arc<dyn SubscriberRepository> =
        Arc::new(StoredSubscriberRepository::new(storage.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let account = match config.admin_credentials() {
        Some((email, hash)) => {
            Argon2PasswordHasher::ensure_valid_hash(hash)?;
            Some(AdminAccount {
                email: email.to_string(),
                password_hash: hash.to_string(),
            })
        }
        None => {
            tracing::warn!("ADMIN_EMAIL is not set; the admin area cannot be unlocked");
            None
        }
    };
    let provider = Arc::new(LocalIdentityProvider::new(account, password_hasher, storage));
    let gate = Arc::new(IdentityGate::spawn(
        Arc::clone(&provider) as Arc<dyn IdentityProvider>
    ));
    provider.restore();

    let renderer: Arc<dyn ContentRenderer> = Arc::new(SanitizingMarkdownRenderer);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        subscriber_repo,
        renderer,
        gate,
        clock,
        slugger,
    ));

    let state = HttpState { services };
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
        .unwrap_or_else(|| "info,tower_http=info".to_string());

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
            tracing::error!(error = %err, "failed to listen for CTRL+C");
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
