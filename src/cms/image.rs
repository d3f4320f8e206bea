//! Image reference resolution.
//!
//! Asset ids have the shape `image-<hash>-<width>x<height>-<format>` and map
//! onto the image CDN as `<cdn>/images/<project>/<dataset>/<hash>-<width>x<height>.<format>`.

use crate::cms::ImageRef;
use crate::config::Config;
use regex::Regex;
use std::sync::OnceLock;

static ASSET_REF_REGEX: OnceLock<Regex> = OnceLock::new();

fn asset_ref_regex() -> &'static Regex {
    ASSET_REF_REGEX.get_or_init(|| {
        Regex::new(r"^image-([A-Za-z0-9]+)-(\d+x\d+)-([a-z0-9]+)$").expect("valid regex")
    })
}

/// Converts opaque image references into displayable URLs.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    cdn_url: String,
    project_id: String,
    dataset: String,
    placeholder_url: String,
}

impl ImageUrlBuilder {
    pub fn new(
        cdn_url: impl Into<String>,
        project_id: impl Into<String>,
        dataset: impl Into<String>,
        placeholder_url: impl Into<String>,
    ) -> Self {
        Self {
            cdn_url: cdn_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            dataset: dataset.into(),
            placeholder_url: placeholder_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.sanity_image_cdn.as_str(),
            config.sanity_project_id.as_str(),
            config.sanity_dataset.as_str(),
            config.placeholder_image_url.as_str(),
        )
    }

    pub fn placeholder_url(&self) -> &str {
        &self.placeholder_url
    }

    /// CDN URL for an image, or `None` when the reference cannot be resolved.
    pub fn url_for(&self, image: &ImageRef) -> Option<String> {
        let asset = image.asset.as_ref()?;

        if let Some(url) = asset.url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_string());
        }

        let reference = asset.reference.as_deref()?;
        let captures = asset_ref_regex().captures(reference)?;

        Some(format!(
            "{}/images/{}/{}/{}-{}.{}",
            self.cdn_url,
            self.project_id,
            self.dataset,
            &captures[1],
            &captures[2],
            &captures[3]
        ))
    }

    /// Like `url_for`, with the CDN asked to scale the image down to `width`.
    pub fn url_with_width(&self, image: &ImageRef, width: u32) -> Option<String> {
        let url = self.url_for(image)?;
        let separator = if url.contains('?') { '&' } else { '?' };
        Some(format!("{}{}w={}", url, separator, width))
    }

    /// Resolve an optional image, falling back to the placeholder.
    pub fn resolve(&self, image: Option<&ImageRef>) -> String {
        image
            .and_then(|image| self.url_for(image))
            .unwrap_or_else(|| self.placeholder_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::AssetRef;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new(
            "https://cdn.sanity.io/",
            "abc123",
            "production",
            "/placeholder.svg",
        )
    }

    #[test]
    fn test_url_for_reference() {
        let image = ImageRef::from_reference("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg");
        assert_eq!(
            builder().url_for(&image).as_deref(),
            Some("https://cdn.sanity.io/images/abc123/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg")
        );
    }

    #[test]
    fn test_url_for_expanded_asset_url() {
        let image = ImageRef {
            asset: Some(AssetRef {
                reference: Some("image-zzz-1x1-png".to_string()),
                url: Some("https://cdn.example.com/x.png".to_string()),
            }),
        };
        assert_eq!(
            builder().url_for(&image).as_deref(),
            Some("https://cdn.example.com/x.png")
        );
    }

    #[test]
    fn test_url_for_malformed_reference() {
        let image = ImageRef::from_reference("file-abc-pdf");
        assert_eq!(builder().url_for(&image), None);
    }

    #[test]
    fn test_url_for_missing_asset() {
        assert_eq!(builder().url_for(&ImageRef { asset: None }), None);
    }

    #[test]
    fn test_url_with_width() {
        let image = ImageRef::from_reference("image-abc-800x600-webp");
        assert_eq!(
            builder().url_with_width(&image, 400).as_deref(),
            Some("https://cdn.sanity.io/images/abc123/production/abc-800x600.webp?w=400")
        );
    }

    #[test]
    fn test_resolve_falls_back_to_placeholder() {
        let builder = builder();
        assert_eq!(builder.resolve(None), "/placeholder.svg");
        assert_eq!(
            builder.resolve(Some(&ImageRef::from_reference("garbage"))),
            "/placeholder.svg"
        );
    }
}
