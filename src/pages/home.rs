use crate::pages::offer::{offer_cards, OfferCard};
use crate::pages::{business, layout, section_heading, spa, PageContext};
use maud::{html, Markup};

const HERO_IMAGE: &str = "/hero/hero-01.jpg";

/// Home page. `offers` is empty when the CMS has none or could not be
/// reached.
pub fn render(ctx: &PageContext<'_>, offers: &[OfferCard]) -> Markup {
    let title = ctx.t("home.title");

    let body = html! {
        section.home-hero style=(format!("background-image: url('{}')", HERO_IMAGE)) {
            h1 { (title) }
            p.subtitle { (ctx.t("home.subtitle")) }
            a.button.primary href=(ctx.href("/kontakt")) { (ctx.t_or("common.bookNow", "Book Now")) }
        }

        section.container.home-offers {
            (section_heading(ctx.t("home.offersTitle")))
            @if offers.is_empty() {
                p.empty { (ctx.t("home.noOffers")) }
            } @else {
                (offer_cards(ctx, offers))
                a.button.outline href=(ctx.href("/pakiety")) { (ctx.t("common.learnMore")) }
            }
        }

        (spa::teaser(ctx))
        (business::teaser(ctx))
    };

    layout(ctx, title, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionary, Language};

    fn card() -> OfferCard {
        OfferCard {
            name: "Weekend SPA".to_string(),
            excerpt: "Relaks".to_string(),
            price: "450\u{a0}zł".to_string(),
            image_url: "/placeholder.svg".to_string(),
            href: "/pl/pakiety/weekend-spa".to_string(),
        }
    }

    #[test]
    fn test_render_with_offers() {
        let dictionary = Dictionary::embedded(Language::POLISH);
        let ctx = PageContext::new(Language::POLISH, &dictionary, "");

        let page = render(&ctx, &[card()]).into_string();

        assert!(page.contains("Weekend SPA"));
        assert!(page.contains(r#"href="/pl/pakiety/weekend-spa""#));
        assert!(page.contains("450\u{a0}zł"));
        assert!(!page.contains(dictionary.t("home.noOffers")));
        assert!(page.contains(r#"href="/pl/spa""#));
        assert!(page.contains(r#"href="/pl/biznes""#));
    }

    #[test]
    fn test_render_without_offers() {
        let dictionary = Dictionary::embedded(Language::ENGLISH);
        let ctx = PageContext::new(Language::ENGLISH, &dictionary, "");

        let page = render(&ctx, &[]).into_string();
        assert!(page.contains(dictionary.t("home.noOffers")));
    }
}
