//! Gallery media normalization.
//!
//! The `Product` query returns media as a heterogeneous list discriminated by
//! `mediaContentType`. [`normalize_media`] turns that list into uniform
//! [`GalleryMedia`] records keyed for rendering, with a canonical type tag,
//! an alt-text fallback, and fixed presentation hints for 3D models.

use serde::{Deserialize, Serialize};

use crate::product::Image;

/// Alt text used when the storefront supplies none.
pub const DEFAULT_ALT_TEXT: &str = "Product image";

/// Storefront `MediaContentType`. Values this crate does not know about
/// deserialize to [`MediaContentType::Unknown`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaContentType {
    #[serde(rename = "IMAGE")]
    Image,
    #[serde(rename = "MODEL_3D")]
    Model3d,
    #[serde(rename = "VIDEO")]
    Video,
    #[serde(rename = "EXTERNAL_VIDEO")]
    ExternalVideo,
    #[serde(other)]
    Unknown,
}

impl MediaContentType {
    /// Canonical renderer tag for this content type. Unknown types render
    /// as images.
    #[must_use]
    pub fn type_tag(self) -> MediaTypeTag {
        match self {
            Self::Model3d => MediaTypeTag::Model3d,
            Self::Video => MediaTypeTag::Video,
            Self::ExternalVideo => MediaTypeTag::ExternalVideo,
            Self::Image | Self::Unknown => MediaTypeTag::MediaImage,
        }
    }
}

/// Renderer component tag, serialized verbatim (`"Model3d"`, `"Video"`,
/// `"MediaImage"`, `"ExternalVideo"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaTypeTag {
    Model3d,
    Video,
    MediaImage,
    ExternalVideo,
}

impl MediaTypeTag {
    /// Presentation hints attached to every record of this tag.
    #[must_use]
    pub fn render_hints(self) -> Option<ModelRenderHints> {
        match self {
            Self::Model3d => Some(ModelRenderHints::default()),
            Self::Video | Self::MediaImage | Self::ExternalVideo => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    #[serde(default)]
    pub mime_type: Option<String>,
    pub url: String,
}

/// One raw media node from the `Product` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub media_content_type: Option<MediaContentType>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub preview_image: Option<PreviewImage>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub sources: Vec<MediaSource>,
    #[serde(default)]
    pub embed_url: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub height: String,
    pub margin: String,
}

/// Fixed viewer settings for 3D models: load eagerly, no zoom, prompt
/// immediately, fill the gallery cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRenderHints {
    pub loading: String,
    pub disable_zoom: bool,
    pub interaction_prompt_threshold: String,
    pub style: RenderStyle,
}

impl Default for ModelRenderHints {
    fn default() -> Self {
        Self {
            loading: "eager".to_owned(),
            disable_zoom: true,
            interaction_prompt_threshold: "0".to_owned(),
            style: RenderStyle {
                height: "100%".to_owned(),
                margin: "0 auto".to_owned(),
            },
        }
    }
}

/// A render-ready gallery record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryMedia {
    /// Stable rendering key.
    pub key: String,
    #[serde(rename = "__typename")]
    pub typename: MediaTypeTag,
    #[serde(default)]
    pub media_content_type: Option<MediaContentType>,
    pub alt: String,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub preview_image: Option<PreviewImage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<MediaSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_hints: Option<ModelRenderHints>,
}

/// Normalizes product media for the gallery.
///
/// Returns `None` for an empty list so callers render no gallery at all.
/// Input order is preserved.
#[must_use]
pub fn normalize_media(records: &[MediaRecord]) -> Option<Vec<GalleryMedia>> {
    if records.is_empty() {
        return None;
    }

    Some(
        records
            .iter()
            .enumerate()
            .map(|(index, record)| normalize_record(index, record))
            .collect(),
    )
}

fn normalize_record(index: usize, record: &MediaRecord) -> GalleryMedia {
    let typename = record
        .media_content_type
        .map_or(MediaTypeTag::MediaImage, MediaContentType::type_tag);

    let alt = record
        .alt
        .as_deref()
        .filter(|alt| !alt.trim().is_empty())
        .unwrap_or(DEFAULT_ALT_TEXT)
        .to_owned();

    let image = record.image.clone().map(|image| Image {
        alt_text: Some(alt.clone()),
        ..image
    });

    GalleryMedia {
        key: media_key(index, record),
        typename,
        media_content_type: record.media_content_type,
        alt,
        image,
        preview_image: record.preview_image.clone(),
        sources: record.sources.clone(),
        embed_url: record.embed_url.clone(),
        host: record.host.clone(),
        render_hints: typename.render_hints(),
    }
}

/// Record id, then image id, then position.
fn media_key(index: usize, record: &MediaRecord) -> String {
    record
        .id
        .clone()
        .or_else(|| record.image.as_ref().and_then(|image| image.id.clone()))
        .unwrap_or_else(|| format!("media-{index}"))
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
