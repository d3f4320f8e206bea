use crate::content::spa;
use crate::pages::{layout, section_heading, PageContext};
use maud::{html, Markup};

pub fn render(ctx: &PageContext<'_>) -> Markup {
    let title = ctx.t("spa.title");

    let body = html! {
        section.container.spa-intro {
            div.two-columns {
                div {
                    h1 { (title) }
                    p.lead { (ctx.t("spa.description")) }
                    p { (ctx.t("spa.description2")) }
                    div.actions {
                        a.button.primary href=(ctx.href("/kontakt")) { (ctx.t("spa.bookAppointment")) }
                        a.button.outline href="/downloads/spa-catalog.pdf" { (ctx.t("spa.downloadCatalog")) }
                    }
                }
                figure { img src=(spa::INTRO_IMAGE) alt=(title); }
            }
        }

        section.container.wellness {
            (section_heading(ctx.t("spa.wellnessTitle")))
            p.subtitle { (ctx.t("spa.wellnessSubtitle")) }
            div.two-columns {
                figure { img src=(spa::WELLNESS_IMAGE) alt=(ctx.t("spa.wellnessTitle")) loading="lazy"; }
                div {
                    p { (ctx.t("spa.wellnessDescription")) }
                    div.treatments {
                        @for treatment in spa::TREATMENTS {
                            article.treatment id=(treatment.id) {
                                h3 { (ctx.t(treatment.name_key)) }
                                p { (ctx.t(treatment.description_key)) }
                                dl {
                                    dt { (ctx.t("spa.priceRange")) }
                                    dd { (ctx.t(treatment.price_range_key)) }
                                    dt { (ctx.t("spa.duration")) }
                                    dd { (ctx.t(treatment.duration_key)) }
                                }
                            }
                        }
                    }
                }
            }
        }

        section.container.featured-services {
            (section_heading(ctx.t("spa.featuredTitle")))
            div.card-grid {
                @for service in spa::FEATURED_SERVICES {
                    article.service-card {
                        img src=(service.image) alt=(ctx.t(service.name_key)) loading="lazy";
                        h3 { (ctx.t(service.name_key)) }
                        p { (ctx.t(service.description_key)) }
                        div.service-meta {
                            span.price { (ctx.t(service.price_key)) }
                            span.duration { (ctx.t(service.duration_key)) }
                        }
                    }
                }
            }
        }

        section.container.salt-room {
            (section_heading(ctx.t("spa.saltRoomTitle")))
            p.subtitle { (ctx.t("spa.saltRoomSubtitle")) }
            div.two-columns {
                div {
                    ul.benefits {
                        @for id in spa::SALT_ROOM_BENEFITS {
                            li {
                                h3 { (ctx.text(&format!("spa.saltRoomBenefits.{}.title", id))) }
                                p { (ctx.text(&format!("spa.saltRoomBenefits.{}.description", id))) }
                            }
                        }
                    }
                    table.price-list {
                        @for id in spa::SALT_ROOM_PRICES {
                            tr {
                                td { (ctx.text(&format!("spa.saltRoomPrices.{}.title", id))) }
                                td.price { (ctx.text(&format!("spa.saltRoomPrices.{}.price", id))) }
                            }
                        }
                    }
                }
                figure { img src=(spa::SALT_ROOM_IMAGE) alt=(ctx.t("spa.saltRoomTitle")) loading="lazy"; }
            }
        }

        section.container.beauty {
            (section_heading(ctx.t("spa.beautyTitle")))
            p.subtitle { (ctx.t("spa.beautySubtitle")) }
            div.two-columns {
                figure { img src=(spa::BEAUTY_IMAGE) alt=(ctx.t("spa.beautyTitle")) loading="lazy"; }
                ul.beauty-services {
                    @for id in spa::BEAUTY_SERVICES {
                        li {
                            div {
                                h3 { (ctx.text(&format!("spa.beautyServices.{}.title", id))) }
                                p { (ctx.text(&format!("spa.beautyServices.{}.description", id))) }
                            }
                            span.price { (ctx.text(&format!("spa.beautyServices.{}.price", id))) }
                        }
                    }
                }
            }
            div.actions {
                a.button.primary href=(ctx.href("/kontakt")) { (ctx.t("spa.bookAppointment")) }
            }
        }
    };

    layout(ctx, title, body)
}

/// Spa block on the home page.
pub fn teaser(ctx: &PageContext<'_>) -> Markup {
    html! {
        section.container.spa-teaser {
            div.two-columns {
                div {
                    (section_heading(ctx.t("spa.title")))
                    p { (ctx.t("home.spaDescription")) }
                    ul.attractions {
                        @for id in spa::ATTRACTIONS {
                            li { span.icon.icon-check {} (ctx.text(&format!("spa.attractions.{}", id))) }
                        }
                    }
                    a.button.outline href=(ctx.href("/spa")) { (ctx.t("home.spaMore")) }
                }
                div.image-pair {
                    @for image in spa::TEASER_IMAGES {
                        img src=(image) alt=(ctx.t("spa.title")) loading="lazy";
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionary, Language};

    #[test]
    fn test_render_polish() {
        let dictionary = Dictionary::embedded(Language::POLISH);
        let ctx = PageContext::new(Language::POLISH, &dictionary, "/spa");

        let page = render(&ctx).into_string();

        assert!(page.contains(r#"<html lang="pl">"#));
        assert!(page.contains(dictionary.t("spa.title")));
        assert!(page.contains(dictionary.t("spa.treatments.massage.name")));
        assert!(page.contains(dictionary.t("spa.beautyServices.japanese.title")));
        assert!(page.contains(spa::SALT_ROOM_IMAGE));
    }

    #[test]
    fn test_render_has_no_unresolved_keys() {
        for language in Language::all() {
            let dictionary = Dictionary::embedded(language);
            let ctx = PageContext::new(language, &dictionary, "/spa");

            let page = render(&ctx).into_string();
            assert!(!page.contains("spa.saltRoom"), "{}: unresolved key", language);
            assert!(!page.contains("spa.beautyServices"), "{}: unresolved key", language);
        }
    }

    #[test]
    fn test_teaser_lists_attractions() {
        let dictionary = Dictionary::embedded(Language::ENGLISH);
        let ctx = PageContext::new(Language::ENGLISH, &dictionary, "");

        let teaser = teaser(&ctx).into_string();
        for id in spa::ATTRACTIONS {
            assert!(teaser.contains(dictionary.t(&format!("spa.attractions.{}", id))));
        }
        assert!(teaser.contains(r#"href="/en/spa""#));
    }
}
