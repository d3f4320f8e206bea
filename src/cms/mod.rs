//! Headless CMS access: offer documents, the query client and image URLs.

mod client;
mod error;
mod image;
mod model;

pub use client::{ContentSource, SanityClient};
pub use error::CmsError;
pub use image::ImageUrlBuilder;
pub use model::{AssetRef, Block, ImageRef, Offer, Span};
