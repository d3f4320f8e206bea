//! Page handlers.
//!
//! Every handler validates the language segment first, then fetches the
//! dictionary and any CMS data concurrently before rendering.

use crate::cms::Offer;
use crate::i18n::Language;
use crate::pages::contact::ContactDetails;
use crate::pages::offer::{OfferCard, OfferPageView};
use crate::pages::{self, PageContext};
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use maud::Markup;
use tracing::{debug, error, warn};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_redirect))
        .route("/:lang", get(home))
        .route("/:lang/pakiety", get(offers_index))
        .route("/:lang/pakiety/:slug", get(offer))
        .route("/:lang/spa", get(spa))
        .route("/:lang/wesela", get(events))
        .route("/:lang/biznes", get(business))
        .route("/:lang/kontakt", get(contact))
}

fn html(status: StatusCode, markup: Markup) -> Response {
    (status, Html(markup.into_string())).into_response()
}

/// Not-found page in the default language.
async fn not_found_page(state: &AppState) -> Response {
    let language = Language::default_language();
    let dictionary = state.dictionaries.load(language).await;
    let ctx = PageContext::new(language, &dictionary, "");
    html(StatusCode::NOT_FOUND, pages::not_found::render(&ctx))
}

/// Accepts only enabled language codes.
fn parse_language(code: &str) -> Option<Language> {
    match Language::from_code(code) {
        Ok(language) => Some(language),
        Err(e) => {
            debug!("Rejected language segment: {}", e);
            None
        }
    }
}

pub async fn fallback(State(state): State<AppState>) -> Response {
    not_found_page(&state).await
}

async fn root_redirect(headers: HeaderMap) -> Redirect {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let language = Language::negotiate(accept_language);
    Redirect::temporary(&pages::localized_path(language, ""))
}

async fn home(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    let Some(language) = parse_language(&lang) else {
        return not_found_page(&state).await;
    };

    let (dictionary, offers) = tokio::join!(
        state.dictionaries.load(language),
        state.content.offers()
    );

    // The home page still renders without the offers block.
    let offers = offers.unwrap_or_else(|e| {
        error!("Failed to load offers for home page: {}", e);
        Vec::new()
    });
    let cards = offer_cards(&state, &offers, language);

    let ctx = PageContext::new(language, &dictionary, "");
    html(StatusCode::OK, pages::home::render(&ctx, &cards))
}

async fn offers_index(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    let Some(language) = parse_language(&lang) else {
        return not_found_page(&state).await;
    };

    let (dictionary, offers) = tokio::join!(
        state.dictionaries.load(language),
        state.content.offers()
    );

    let ctx = PageContext::new(language, &dictionary, "/pakiety");
    match offers {
        Ok(offers) => {
            let cards = offer_cards(&state, &offers, language);
            html(StatusCode::OK, pages::offer::render_index(&ctx, &cards))
        }
        Err(e) => {
            error!("Failed to load offers: {}", e);
            html(
                StatusCode::SERVICE_UNAVAILABLE,
                pages::not_found::render_unavailable(&ctx),
            )
        }
    }
}

async fn offer(
    State(state): State<AppState>,
    Path((lang, slug)): Path<(String, String)>,
) -> Response {
    let Some(language) = parse_language(&lang) else {
        return not_found_page(&state).await;
    };

    let (dictionary, record) = tokio::join!(
        state.dictionaries.load(language),
        state.content.offer_by_slug(&slug)
    );

    let (record, status) = match record {
        Ok(Some(offer)) => (Some(offer), StatusCode::OK),
        Ok(None) => {
            warn!("No offer with slug '{}'", slug);
            (None, StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!("Failed to fetch offer '{}': {}", slug, e);
            (None, StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    let view = OfferPageView::build(
        record.as_ref(),
        language,
        &state.config.pricing,
        &state.images,
    );
    let path = format!("/pakiety/{}", slug);
    let ctx = PageContext::new(language, &dictionary, &path);
    html(status, pages::offer::render(&ctx, &view))
}

async fn spa(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    static_page(&state, &lang, "/spa", pages::spa::render).await
}

async fn events(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    static_page(&state, &lang, "/wesela", pages::events::render).await
}

async fn business(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    static_page(&state, &lang, "/biznes", pages::business::render).await
}

async fn contact(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    let Some(language) = parse_language(&lang) else {
        return not_found_page(&state).await;
    };

    let dictionary = state.dictionaries.load(language).await;
    let details = ContactDetails {
        email: state.config.contact_email.as_deref(),
        phone: state.config.contact_phone.as_deref(),
    };
    let ctx = PageContext::new(language, &dictionary, "/kontakt");
    html(StatusCode::OK, pages::contact::render(&ctx, details))
}

/// Pages that need only the dictionary.
async fn static_page(
    state: &AppState,
    lang: &str,
    path: &str,
    render: fn(&PageContext<'_>) -> Markup,
) -> Response {
    let Some(language) = parse_language(lang) else {
        return not_found_page(state).await;
    };

    let dictionary = state.dictionaries.load(language).await;
    let ctx = PageContext::new(language, &dictionary, path);
    html(StatusCode::OK, render(&ctx))
}

fn offer_cards(
    state: &AppState,
    offers: &[Offer],
    language: Language,
) -> Vec<OfferCard> {
    offers
        .iter()
        .filter_map(|offer| {
            OfferCard::build(offer, language, &state.config.pricing, &state.images)
        })
        .collect()
}
