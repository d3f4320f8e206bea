use crate::content::events;
use crate::i18n::format_date;
use crate::pages::{layout, section_heading, PageContext};
use maud::{html, Markup};

pub fn render(ctx: &PageContext<'_>) -> Markup {
    let title = ctx.t("events.title");

    let body = html! {
        section.container.events-intro {
            h1 { (title) }
            p.lead { (ctx.t("events.description")) }
            div.actions {
                a.button.primary href=(ctx.href("/kontakt")) { (ctx.t("events.bookDate")) }
                a.button.outline href="/downloads/wedding-offer.pdf" { (ctx.t("events.downloadOffer")) }
            }
        }

        section.container.venues {
            (section_heading(ctx.t("events.venuesTitle")))
            p.subtitle { (ctx.t("events.venuesDescription")) }
            div.card-grid {
                @for venue in events::VENUES {
                    article.venue-card id=(venue.id) {
                        img src=(venue.image) alt=(ctx.t(venue.name_key)) loading="lazy";
                        h3 { (ctx.t(venue.name_key)) }
                        p { (ctx.t(venue.description_key)) }
                        dl {
                            dt { (ctx.t("events.venueInfo.maxGuests")) }
                            dd { (venue.capacity) " " (ctx.t("events.venueInfo.people")) }
                            dt { (ctx.t("events.venueInfo.area")) }
                            dd { (venue.area_m2) " m²" }
                        }
                        h4 { (ctx.t("events.venueInfo.amenities")) }
                        ul {
                            @for key in venue.feature_keys {
                                li { span.icon.icon-check {} (ctx.t(key)) }
                            }
                        }
                    }
                }
            }
        }

        section.container.wedding-packages {
            (section_heading(ctx.t("events.packages.title")))
            div.card-grid {
                @for package in events::WEDDING_PACKAGES {
                    article.package-card {
                        h3 { (ctx.t(package.name_key)) }
                        p { (ctx.t(package.description_key)) }
                        strong.price { (ctx.t(package.price_key)) }
                        a.button.outline href=(ctx.href("/kontakt")) { (ctx.t("events.inquireDetails")) }
                    }
                }
            }
        }

        section.container.additional-services {
            (section_heading(ctx.t("events.services.title")))
            ul.services {
                @for id in events::ADDITIONAL_SERVICES {
                    li {
                        h3 { (ctx.text(&format!("events.services.{}.name", id))) }
                        p { (ctx.text(&format!("events.services.{}.description", id))) }
                    }
                }
            }
        }

        section.container.events-gallery {
            (section_heading(ctx.t("events.galleryTitle")))
            div.gallery-grid {
                @for image in events::GALLERY {
                    img src=(image) alt=(title) loading="lazy";
                }
            }
        }

        section.container.availability {
            (section_heading(ctx.t("events.availableDates")))
            p { (ctx.t("events.availabilityDescription")) }
            ul.dates {
                @for date in events::available_dates() {
                    li { time datetime=(date.format("%Y-%m-%d").to_string()) { (format_date(date, ctx.language)) } }
                }
            }
            a.button.primary href=(ctx.href("/kontakt")) { (ctx.t("events.checkAvailability")) }
        }
    };

    layout(ctx, title, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionary, Language};

    #[test]
    fn test_render_english() {
        let dictionary = Dictionary::embedded(Language::ENGLISH);
        let ctx = PageContext::new(Language::ENGLISH, &dictionary, "/wesela");

        let page = render(&ctx).into_string();

        assert!(page.contains(dictionary.t("events.title")));
        assert!(page.contains(dictionary.t("events.venues.ballroom.name")));
        assert!(page.contains(dictionary.t("events.packages.premium.price")));
        assert!(page.contains("200 "));
        assert!(page.contains("320 m²"));
        assert!(page.contains("07/10/2025"));
        assert!(page.contains(r#"datetime="2025-07-10""#));
    }

    #[test]
    fn test_dates_use_language_format() {
        let dictionary = Dictionary::embedded(Language::POLISH);
        let ctx = PageContext::new(Language::POLISH, &dictionary, "/wesela");

        let page = render(&ctx).into_string();
        assert!(page.contains("10.07.2025"));
        assert!(!page.contains("07/10/2025"));
    }
}
