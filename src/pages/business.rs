use crate::content::business;
use crate::pages::{layout, section_heading, PageContext};
use maud::{html, Markup};

pub fn render(ctx: &PageContext<'_>) -> Markup {
    let title = ctx.t("business.title");

    let body = html! {
        section.container.business-intro {
            h1 { (title) }
            p.lead { (ctx.t("business.description")) }
        }

        section.container.conference-rooms {
            (section_heading(ctx.t("business.roomsTitle")))
            div.card-grid {
                @for room in business::CONFERENCE_ROOMS {
                    article.room-card id=(room.id) {
                        img src=(room.image) alt=(ctx.t(room.name_key)) loading="lazy";
                        h3 { (ctx.t(room.name_key)) }
                        p { (ctx.t(room.description_key)) }
                        dl {
                            dt { (ctx.t("business.capacity")) }
                            dd { (room.capacity) " " (ctx.t("business.people")) }
                            dt { (ctx.t("business.area")) }
                            dd { (room.area_m2) " m²" }
                        }
                    }
                }
            }
        }

        section.container.equipment {
            (section_heading(ctx.t("business.equipmentTitle")))
            ul.equipment-list {
                @for id in business::EQUIPMENT {
                    li { span.icon.icon-check {} (ctx.text(&format!("business.equipment.{}", id))) }
                }
            }
            a.button.primary href=(ctx.href("/kontakt")) { (ctx.t("business.inquire")) }
        }
    };

    layout(ctx, title, body)
}

/// Business block on the home page.
pub fn teaser(ctx: &PageContext<'_>) -> Markup {
    html! {
        section.container.business-teaser {
            div.two-columns {
                div.image-pair {
                    @for image in business::TEASER_IMAGES {
                        img src=(image) alt=(ctx.t("home.businessTitle")) loading="lazy";
                    }
                }
                div {
                    (section_heading(ctx.t("home.businessTitle")))
                    p { (ctx.t("home.businessDescription")) }
                    a.button.outline href=(ctx.href("/biznes")) { (ctx.t("home.businessMore")) }
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
    fn test_render_lists_rooms_and_equipment() {
        let dictionary = Dictionary::embedded(Language::POLISH);
        let ctx = PageContext::new(Language::POLISH, &dictionary, "/biznes");

        let page = render(&ctx).into_string();

        for room in business::CONFERENCE_ROOMS {
            assert!(page.contains(dictionary.t(room.name_key)));
        }
        assert!(page.contains("220 m²"));
        assert!(page.contains(dictionary.t("business.equipment.wifi")));
        assert!(!page.contains("business.equipment."));
    }

    #[test]
    fn test_teaser_links_to_business_page() {
        let dictionary = Dictionary::embedded(Language::ENGLISH);
        let ctx = PageContext::new(Language::ENGLISH, &dictionary, "");

        assert!(teaser(&ctx).into_string().contains(r#"href="/en/biznes""#));
    }
}
