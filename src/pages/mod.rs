//! Server-rendered pages.
//!
//! Each page module turns resolved data plus static content into `Markup`.
//! Rendering is pure: all fetching happens in the route handlers.

pub mod business;
pub mod contact;
pub mod events;
pub mod home;
pub mod not_found;
pub mod offer;
pub mod spa;

use crate::i18n::{Dictionary, Language};
use maud::{html, Markup, DOCTYPE};

/// Per-request rendering context.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub language: Language,
    pub dictionary: &'a Dictionary,
    /// Route path after the language segment (e.g. "/spa"), used by the
    /// language switcher.
    pub path: &'a str,
}

impl<'a> PageContext<'a> {
    pub fn new(language: Language, dictionary: &'a Dictionary, path: &'a str) -> Self {
        Self {
            language,
            dictionary,
            path,
        }
    }

    pub fn t(&self, key: &'a str) -> &'a str {
        self.dictionary.t(key)
    }

    pub fn t_or(&self, key: &str, default: &'a str) -> &'a str {
        self.dictionary.t_or(key, default)
    }

    /// Owned lookup for keys built at runtime.
    pub fn text(&self, key: &str) -> String {
        self.dictionary.t(key).to_string()
    }

    /// Link to a route in the current language.
    pub fn href(&self, rest: &str) -> String {
        localized_path(self.language, rest)
    }
}

pub fn localized_path(language: Language, rest: &str) -> String {
    format!("/{}{}", language.code(), rest)
}

/// Replace `{name}` placeholders in a dictionary template.
pub fn fill<V: AsRef<str>>(template: &str, values: &[(&str, V)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value.as_ref())
        })
}

/// Full HTML document around a page body.
pub fn layout(ctx: &PageContext<'_>, title: &str, content: Markup) -> Markup {
    let site_name = ctx.t_or("common.siteName", "Hotel Avangarda");

    html! {
        (DOCTYPE)
        html lang=(ctx.language.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (site_name) }
                @for language in Language::all() {
                    link rel="alternate" hreflang=(language.locale()) href=(localized_path(language, ctx.path));
                }
            }
            body {
                header.site-header {
                    a.brand href=(ctx.href("")) { (site_name) }
                    nav {
                        ul {
                            li { a href=(ctx.href("")) { (ctx.t("nav.home")) } }
                            li { a href=(ctx.href("/pakiety")) { (ctx.t("nav.offers")) } }
                            li { a href=(ctx.href("/spa")) { (ctx.t("nav.spa")) } }
                            li { a href=(ctx.href("/wesela")) { (ctx.t("nav.events")) } }
                            li { a href=(ctx.href("/biznes")) { (ctx.t("nav.business")) } }
                            li { a href=(ctx.href("/kontakt")) { (ctx.t("nav.contact")) } }
                        }
                    }
                    ul.language-switcher aria-label=(ctx.t("common.language")) {
                        @for language in Language::all() {
                            li {
                                @if language == ctx.language {
                                    span aria-current="true" { (language.native_name()) }
                                } @else {
                                    a href=(localized_path(language, ctx.path)) hreflang=(language.code()) {
                                        (language.native_name())
                                    }
                                }
                            }
                        }
                    }
                }
                main { (content) }
                footer.site-footer {
                    p { "© " (site_name) }
                }
            }
        }
    }
}

/// Section heading with the accent bar used across pages.
pub fn section_heading(text: &str) -> Markup {
    html! {
        h2.section-heading {
            span.accent-bar {}
            (text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_placeholders() {
        assert_eq!(fill("Dla {count} osób", &[("count", "2")]), "Dla 2 osób");
        assert_eq!(
            fill("{a} and {b} and {a}", &[("a", "x"), ("b", "y")]),
            "x and y and x"
        );
        assert_eq!(fill("no placeholders", &[("a", "x")]), "no placeholders");
    }

    #[test]
    fn test_localized_path() {
        assert_eq!(localized_path(Language::ENGLISH, "/spa"), "/en/spa");
        assert_eq!(localized_path(Language::POLISH, ""), "/pl");
    }

    #[test]
    fn test_layout_sets_lang_and_switcher() {
        let dictionary = Dictionary::embedded(Language::ENGLISH);
        let ctx = PageContext::new(Language::ENGLISH, &dictionary, "/spa");

        let page = layout(&ctx, "Spa", html! { p { "body" } }).into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<html lang="en">"#));
        assert!(page.contains(r#"href="/pl/spa""#));
        assert!(page.contains("<p>body</p>"));
        assert!(page.contains("Spa | Hotel Avangarda"));
    }

    #[test]
    fn test_layout_escapes_title() {
        let dictionary = Dictionary::empty();
        let ctx = PageContext::new(Language::POLISH, &dictionary, "");

        let page = layout(&ctx, "<script>", html! {}).into_string();
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
