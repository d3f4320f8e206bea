use crate::pages::{layout, PageContext};
use maud::{html, Markup};

pub fn render(ctx: &PageContext<'_>) -> Markup {
    let title = ctx.t_or("common.pageNotFound", "Page not found");

    let body = html! {
        section.container.not-found {
            h1 { (title) }
            p { (ctx.t("common.pageNotFoundDescription")) }
            a.button.primary href=(ctx.href("")) { (ctx.t("common.backHome")) }
        }
    };

    layout(ctx, title, body)
}

/// Shown when the CMS cannot be reached for a page that needs it.
pub fn render_unavailable(ctx: &PageContext<'_>) -> Markup {
    let title = ctx.t_or("common.serviceUnavailable", "Service temporarily unavailable");

    let body = html! {
        section.container.not-found {
            h1 { (title) }
            a.button.primary href=(ctx.href("")) { (ctx.t("common.backHome")) }
        }
    };

    layout(ctx, title, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionary, Language};

    #[test]
    fn test_render_not_found() {
        let dictionary = Dictionary::embedded(Language::ENGLISH);
        let ctx = PageContext::new(Language::ENGLISH, &dictionary, "");

        let page = render(&ctx).into_string();
        assert!(page.contains("Page not found"));
        assert!(page.contains(r#"href="/en""#));
    }

    #[test]
    fn test_render_without_dictionary_uses_defaults() {
        let dictionary = Dictionary::empty();
        let ctx = PageContext::new(Language::POLISH, &dictionary, "");

        assert!(render(&ctx).into_string().contains("Page not found"));
        assert!(render_unavailable(&ctx)
            .into_string()
            .contains("Service temporarily unavailable"));
    }
}
