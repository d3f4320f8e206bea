//! Render one offer page to stdout without starting the server.
//!
//! Usage:
//!   cargo run --bin render-offer -- <lang> <slug>
//!   cargo run --bin render-offer -- pl romantyczny-weekend > offer.html
//!
//! Reads the same environment as the server (SANITY_PROJECT_ID is required).
//! Logs go to stderr so the HTML can be redirected.

use anyhow::{bail, Context, Result};
use avangarda_site::cms::{ContentSource, ImageUrlBuilder, SanityClient};
use avangarda_site::config::Config;
use avangarda_site::i18n::{DictionaryLoader, Language};
use avangarda_site::pages::{self, offer::OfferPageView, PageContext};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("avangarda_site=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [lang, slug] = args.as_slice() else {
        bail!("Usage: render-offer <lang> <slug>");
    };

    let language = Language::from_code(lang)?;
    let config = Config::from_env()?;

    let client = SanityClient::new(&config);
    let loader = DictionaryLoader::new(config.dictionary_dir.clone());
    let images = ImageUrlBuilder::from_config(&config);

    info!("Fetching offer '{}' ({})", slug, language);
    let (dictionary, record) = tokio::join!(loader.load(language), client.offer_by_slug(slug));
    let record = record.with_context(|| format!("Failed to fetch offer '{}'", slug))?;

    if record.is_none() {
        warn!("No offer with slug '{}', rendering placeholder page", slug);
    }

    let view = OfferPageView::build(record.as_ref(), language, &config.pricing, &images);
    let path = format!("/pakiety/{}", slug);
    let ctx = PageContext::new(language, &dictionary, &path);

    println!("{}", pages::offer::render(&ctx, &view).into_string());
    Ok(())
}
