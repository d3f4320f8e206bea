use crate::i18n::LanguageRegistry;
use crate::resolver::PricingRules;
use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;

pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str =
    "/placeholder.svg?height=1200&width=800&query=luxury+hotel+room";

/// File in the public directory that the default placeholder URL points at.
pub const PLACEHOLDER_FILE: &str = "placeholder.svg";

#[derive(Debug, Clone)]
pub struct Config {
    // Content backend
    pub sanity_project_id: String,
    pub sanity_dataset: String,
    pub sanity_api_version: String,
    pub sanity_api_url: String,
    pub sanity_token: Option<String>,
    pub sanity_image_cdn: String,

    // Presentation
    pub dictionary_dir: Option<PathBuf>,
    pub placeholder_image_url: String,
    pub pricing: PricingRules,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,

    // Server
    pub public_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let sanity_project_id =
            std::env::var("SANITY_PROJECT_ID").context("SANITY_PROJECT_ID not set")?;

        let sanity_api_url = std::env::var("SANITY_API_URL")
            .unwrap_or_else(|_| format!("https://{}.apicdn.sanity.io", sanity_project_id));

        let per_unit_divisor = match std::env::var("PER_UNIT_DIVISOR") {
            Ok(raw) => {
                let divisor: u32 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("PER_UNIT_DIVISOR is not a number: {}", raw))?;
                if divisor == 0 {
                    bail!("PER_UNIT_DIVISOR must be at least 1");
                }
                divisor
            }
            Err(_) => PricingRules::DEFAULT_PER_UNIT_DIVISOR,
        };

        // DEFAULT_CURRENCY_PL, DEFAULT_CURRENCY_EN, ...
        let currency_overrides: HashMap<String, String> = LanguageRegistry::get()
            .list_all()
            .into_iter()
            .filter_map(|lang| {
                let key = format!("DEFAULT_CURRENCY_{}", lang.code.to_ascii_uppercase());
                std::env::var(key)
                    .ok()
                    .map(|v| v.trim().to_ascii_uppercase())
                    .filter(|v| !v.is_empty())
                    .map(|v| (lang.code.to_string(), v))
            })
            .collect();

        Ok(Self {
            sanity_project_id,
            sanity_dataset: std::env::var("SANITY_DATASET")
                .unwrap_or_else(|_| "production".to_string()),
            sanity_api_version: std::env::var("SANITY_API_VERSION")
                .unwrap_or_else(|_| "2024-01-01".to_string()),
            sanity_api_url,
            sanity_token: non_empty_var("SANITY_TOKEN"),
            sanity_image_cdn: std::env::var("SANITY_IMAGE_CDN")
                .unwrap_or_else(|_| "https://cdn.sanity.io".to_string()),

            dictionary_dir: std::env::var("DICTIONARY_DIR").ok().map(PathBuf::from),
            placeholder_image_url: std::env::var("PLACEHOLDER_IMAGE_URL")
                .unwrap_or_else(|_| DEFAULT_PLACEHOLDER_IMAGE_URL.to_string()),
            pricing: PricingRules::new(per_unit_divisor, currency_overrides),
            contact_email: non_empty_var("CONTACT_EMAIL"),
            contact_phone: non_empty_var("CONTACT_PHONE"),

            public_dir: std::env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }

    /// Socket address string for the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
