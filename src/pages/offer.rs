//! Offer (package) pages: the single-offer page and the offers index.

use crate::cms::{ImageUrlBuilder, Offer};
use crate::content::PackageDetails;
use crate::i18n::{format_date, Language};
use crate::pages::{fill, layout, localized_path, section_heading, PageContext};
use crate::resolver::{
    format_prices, localize_offer, placeholder_offer, LocalizedOffer, OfferPrices, PricingRules,
};
use maud::{html, Markup};

const EXCERPT_CHARS: usize = 160;

/// Everything the offer page shows that is derived from the CMS record.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferPageView {
    pub content: LocalizedOffer,
    pub prices: OfferPrices,
    pub image_url: String,
    /// False when no record matched; the page then shows placeholder content
    /// and a not-found message.
    pub found: bool,
}

impl OfferPageView {
    pub fn build(
        offer: Option<&Offer>,
        language: Language,
        pricing: &PricingRules,
        images: &ImageUrlBuilder,
    ) -> Self {
        let (content, found) = match offer {
            Some(offer) => (localize_offer(offer, language, pricing), true),
            None => (placeholder_offer(language, pricing), false),
        };

        let prices = format_prices(&content, language, pricing);
        let image_url = images.resolve(offer.and_then(|o| o.image.as_ref()));

        Self {
            content,
            prices,
            image_url,
            found,
        }
    }
}

/// One entry on the offers index.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferCard {
    pub name: String,
    pub excerpt: String,
    pub price: String,
    pub image_url: String,
    pub href: String,
}

impl OfferCard {
    /// Offers without a slug cannot be linked and are skipped.
    pub fn build(
        offer: &Offer,
        language: Language,
        pricing: &PricingRules,
        images: &ImageUrlBuilder,
    ) -> Option<Self> {
        let slug = offer.slug.as_deref().filter(|s| !s.is_empty())?;
        let content = localize_offer(offer, language, pricing);
        let prices = format_prices(&content, language, pricing);
        let image_url = offer
            .image
            .as_ref()
            .and_then(|image| images.url_with_width(image, 800))
            .unwrap_or_else(|| images.placeholder_url().to_string());

        Some(Self {
            excerpt: excerpt(&content.description, EXCERPT_CHARS),
            name: content.name,
            price: prices.total,
            image_url,
            href: localized_path(language, &format!("/pakiety/{}", slug)),
        })
    }
}

/// Shorten text to at most `max_chars` characters, ending with an ellipsis
/// when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

pub fn render(ctx: &PageContext<'_>, view: &OfferPageView) -> Markup {
    let details = PackageDetails::for_language(ctx.language);
    let content = &view.content;

    let valid_until = details
        .valid_until()
        .map(|date| format_date(date, ctx.language))
        .unwrap_or_default();

    let body = html! {
        section.offer-hero {
            div.offer-hero-content {
                span.badge { (ctx.t_or("common.specialOffer", "Special offer")) }
                h1 { (content.name) }
                div.offer-price {
                    span.icon.icon-tag {}
                    strong.price-total { (view.prices.total) }
                    span.price-unit { (ctx.t("offer.perPackage")) }
                }
                ul.offer-facts {
                    li { span.icon.icon-calendar {} (details.duration) }
                    li {
                        span.icon.icon-users {}
                        (fill(ctx.t("offer.forGuests"), &[("count", &details.max_guests.to_string())]))
                    }
                    li {
                        span.icon.icon-calendar-days {}
                        (fill(ctx.t("offer.validUntil"), &[("date", &valid_until)]))
                    }
                    li { span.icon.icon-badge-check {} (details.room_type) }
                }
                p.offer-lead { (content.description) }
                div.actions {
                    a.button.primary href=(ctx.href("/kontakt")) { (ctx.t_or("common.bookNow", "Book Now")) }
                    a.button.outline href=(ctx.href("/kontakt")) { (ctx.t_or("common.contactUs", "Contact Us")) }
                }
            }
            figure.offer-hero-image {
                img src=(view.image_url) alt=(content.name);
            }
        }

        div.container {
            @if view.found {
                (overview(ctx, view, details))
                (gallery(ctx, details))
                div.two-columns {
                    (terms(ctx, details))
                    (reviews(ctx, details))
                }
                (related(ctx, details))
                (call_to_action(ctx))
            } @else {
                div.not-found {
                    p { (ctx.t_or("common.offerNotFound", "Offer not found.")) }
                    a href=(ctx.href("/pakiety")) { (ctx.t("offer.backToOffers")) }
                }
            }
        }
    };

    layout(ctx, &content.name, body)
}

fn overview(ctx: &PageContext<'_>, view: &OfferPageView, details: &PackageDetails) -> Markup {
    html! {
        section.card.offer-overview {
            (section_heading(ctx.t_or("common.offerDetails", "Offer Details")))
            div.prose { p { (view.content.description) } }

            div.price-breakdown {
                h3 { (ctx.t("offer.priceDetails")) }
                dl {
                    div {
                        dt { (ctx.t("offer.pricePerPackage")) }
                        dd.price-total { (view.prices.total) }
                    }
                    div {
                        dt { (ctx.t("offer.pricePerNight")) }
                        dd.price-per-unit { (view.prices.per_unit) }
                    }
                    div {
                        dt { (ctx.t("offer.youSave")) }
                        dd.savings { (details.savings_percent) "%" }
                    }
                }
            }

            div.included {
                h3 { (ctx.t("offer.included")) }
                ul.amenities {
                    @for amenity in details.amenities {
                        li {
                            span class=(amenity.icon.css_class()) {}
                            span { (amenity.name) }
                        }
                    }
                }
            }

            div.highlights {
                h3 { (ctx.t("offer.highlights")) }
                ul {
                    @for highlight in details.highlights {
                        li { span.icon.icon-check {} (highlight) }
                    }
                }
            }
        }
    }
}

fn gallery(ctx: &PageContext<'_>, details: &PackageDetails) -> Markup {
    html! {
        section.card.gallery {
            (section_heading(ctx.t("offer.gallery")))
            div.gallery-grid {
                @for (index, image) in details.gallery.iter().enumerate() {
                    figure {
                        img src=(image) alt=(fill(ctx.t("offer.galleryImage"), &[("index", &(index + 1).to_string())])) loading="lazy";
                    }
                }
            }
        }
    }
}

fn terms(ctx: &PageContext<'_>, details: &PackageDetails) -> Markup {
    html! {
        section.card.terms {
            (section_heading(ctx.t("offer.terms")))
            ul {
                @for term in details.terms {
                    li { span.icon.icon-info {} (term) }
                }
            }
        }
    }
}

fn reviews(ctx: &PageContext<'_>, details: &PackageDetails) -> Markup {
    html! {
        section.card.reviews {
            (section_heading(ctx.t("offer.reviews")))
            @for review in details.reviews {
                article.review {
                    div.stars aria-label=(fill(ctx.t("offer.rating"), &[("rating", &review.rating.to_string())])) {
                        @for star in 0..5u8 {
                            @if star < review.rating {
                                span.star.filled { "★" }
                            } @else {
                                span.star { "☆" }
                            }
                        }
                    }
                    span.author { (review.author) }
                    p { (review.text) }
                }
            }
        }
    }
}

fn related(ctx: &PageContext<'_>, details: &PackageDetails) -> Markup {
    html! {
        section.card.related-offers {
            (section_heading(ctx.t("offer.related")))
            div.related-grid {
                @for related in details.related_offers {
                    article.related-offer {
                        img src=(related.image) alt=(related.name) loading="lazy";
                        h3 { (related.name) }
                        a.button.outline href=(ctx.href(&format!("/pakiety/{}", related.slug))) {
                            (ctx.t("common.seeDetails"))
                        }
                    }
                }
            }
        }
    }
}

fn call_to_action(ctx: &PageContext<'_>) -> Markup {
    html! {
        section.cta {
            h3 { (ctx.t_or("common.interestedInOffer", "Interested in this offer?")) }
            p { (ctx.t("offer.ctaText")) }
            div.actions {
                a.button.primary href=(ctx.href("/kontakt")) { (ctx.t_or("common.bookNow", "Book Now")) }
                a.button.outline href=(ctx.href("/kontakt")) { (ctx.t_or("common.contactUs", "Contact Us")) }
            }
        }
    }
}

/// Offers index page.
pub fn render_index(ctx: &PageContext<'_>, cards: &[OfferCard]) -> Markup {
    let title = ctx.t("offer.listTitle");

    let body = html! {
        section.container.offers-index {
            h1 { (title) }
            p.lead { (ctx.t("offer.listDescription")) }
            (offer_cards(ctx, cards))
        }
    };

    layout(ctx, title, body)
}

/// Grid of offer cards, shared with the home page.
pub fn offer_cards(ctx: &PageContext<'_>, cards: &[OfferCard]) -> Markup {
    html! {
        @if cards.is_empty() {
            p.empty { (ctx.t("offer.listEmpty")) }
        } @else {
            div.offer-grid {
                @for card in cards {
                    article.offer-card {
                        img src=(card.image_url) alt=(card.name) loading="lazy";
                        h2 { a href=(card.href) { (card.name) } }
                        p { (card.excerpt) }
                        strong.price-total { (card.price) }
                    }
                }
            }
        }
    }
}
