use anyhow::{Context, Result};
use avangarda_site::cms::SanityClient;
use avangarda_site::config::Config;
use avangarda_site::i18n::{DictionaryLoader, DictionaryValidator, Language};
use avangarda_site::server::{build_app, AppState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("avangarda_site=info".parse()?),
        )
        .init();

    info!("Starting avangarda-site v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    validate_dictionaries(&DictionaryLoader::new(config.dictionary_dir.clone())).await;

    let client = SanityClient::new(&config);
    info!("CMS query endpoint: {}", client.query_url());

    let address = config.bind_address();
    let state = AppState::new(config, Arc::new(client));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on {}", address);

    axum::serve(listener, app)
        .await
        .context("Server error")
}

/// Compare every language's dictionary against the default one and log
/// what is missing. Gaps are not fatal: lookups fall back to the key.
async fn validate_dictionaries(loader: &DictionaryLoader) {
    let default = Language::default_language();
    let reference = loader.load(default).await;

    for language in Language::all().into_iter().filter(|l| *l != default) {
        let candidate = loader.load(language).await;
        let report = DictionaryValidator::validate(&reference, &candidate);

        if report.is_clean() {
            info!("Dictionary '{}' matches '{}'", language, default);
            continue;
        }
        for problem in report.errors.iter().chain(&report.warnings) {
            warn!("Dictionary '{}': {}", language, problem);
        }
    }
}
