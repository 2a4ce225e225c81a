use crate::domain::{
    article::{Article, ArticleStatus, ContentBlock},
    carousel::CarouselImage,
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub date: DateTime<Utc>,
    pub content: Vec<ContentBlock>,
    pub status: ArticleStatus,
    pub is_main_featured: bool,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title.into(),
            tagline: article.tagline,
            main_image: article.main_image,
            author: article.author,
            date: article.date,
            content: article.content,
            status: article.status,
            is_main_featured: article.is_main_featured,
        }
    }
}

/// Loosely-typed content block as submitted by clients. The tag is carried
/// as an optional string so a missing or unknown tag surfaces as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlockInput {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
    pub caption: Option<String>,
    pub title: Option<String>,
    pub tweet_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselImageDto {
    pub id: String,
    pub content_type: String,
    /// Raw image bytes, base64-encoded for the JSON wire shape.
    pub data: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CarouselImage> for CarouselImageDto {
    fn from(image: CarouselImage) -> Self {
        Self {
            id: image.id.to_string(),
            content_type: image.content_type,
            data: BASE64.encode(&image.data),
            created_at: image.created_at,
            updated_at: image.updated_at,
        }
    }
}
