use crate::pages::{layout, section_heading, PageContext};
use maud::{html, Markup};

/// Inquiry topics with the page that describes each one.
const TOPICS: &[(&str, &str)] = &[
    ("stay", "/pakiety"),
    ("spa", "/spa"),
    ("events", "/wesela"),
    ("business", "/biznes"),
];

/// Reception details shown on the contact page. Both are optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactDetails<'a> {
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

pub fn render(ctx: &PageContext<'_>, details: ContactDetails<'_>) -> Markup {
    let title = ctx.t("contact.title");

    let body = html! {
        section.container.contact-intro {
            h1 { (title) }
            p.lead { (ctx.t("contact.description")) }
            dl.contact-details {
                @if let Some(email) = details.email {
                    dt { (ctx.t("contact.email")) }
                    dd { a href={ "mailto:" (email) } { (email) } }
                }
                @if let Some(phone) = details.phone {
                    dt { (ctx.t("contact.phone")) }
                    dd { a href={ "tel:" (phone.replace(' ', "")) } { (phone) } }
                }
            }
            p { (ctx.t("contact.reception")) }
            @if let Some(email) = details.email {
                a.button.primary href={ "mailto:" (email) } { (ctx.t("contact.writeToUs")) }
            }
        }

        section.container.contact-topics {
            (section_heading(ctx.t("contact.topicsTitle")))
            ul {
                @for (id, path) in TOPICS {
                    li { a href=(ctx.href(path)) { (ctx.text(&format!("contact.topics.{}", id))) } }
                }
            }
        }
    };

    layout(ctx, title, body)
}
