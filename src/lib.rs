//! Hotel Avangarda website: localized pages rendered from CMS offers,
//! translation dictionaries and static venue content.

pub mod cms;
pub mod config;
pub mod content;
pub mod i18n;
pub mod pages;
pub mod resolver;
pub mod retry;
pub mod server;
