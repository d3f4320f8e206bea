//! HTTP surface: shared state, router and page handlers.

pub mod health;
pub mod pages;

use crate::cms::{ContentSource, ImageUrlBuilder};
use crate::config::{Config, PLACEHOLDER_FILE};
use crate::i18n::DictionaryLoader;
use axum::{
    routing::{any, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub content: Arc<dyn ContentSource>,
    pub dictionaries: Arc<DictionaryLoader>,
    pub images: Arc<ImageUrlBuilder>,
}

impl AppState {
    pub fn new(config: Config, content: Arc<dyn ContentSource>) -> Self {
        let dictionaries = DictionaryLoader::new(config.dictionary_dir.clone());
        let images = ImageUrlBuilder::from_config(&config);

        Self {
            config: Arc::new(config),
            content,
            dictionaries: Arc::new(dictionaries),
            images: Arc::new(images),
        }
    }
}

/// Routes first, then files from the public directory, then the HTML 404 page.
///
/// Root-level files would be taken by `/:lang`, so the placeholder image
/// gets its own route; everything else lives in subdirectories.
pub fn build_app(state: AppState) -> Router {
    let public_dir = &state.config.public_dir;
    let not_found: MethodRouter = any(pages::fallback).with_state(state.clone());
    let assets = ServeDir::new(public_dir).not_found_service(not_found);

    Router::new()
        .merge(health::routes())
        .merge(pages::routes())
        .route_service(
            &format!("/{}", PLACEHOLDER_FILE),
            ServeFile::new(public_dir.join(PLACEHOLDER_FILE)),
        )
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
