use crate::domain::errors::{DomainError, DomainResult};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
    Video,
    Tweet,
}

impl BlockKind {
    pub fn parse(tag: &str) -> DomainResult<Self> {
        match tag {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "tweet" => Ok(Self::Tweet),
            other => Err(DomainError::Validation(format!(
                "unrecognized content block type: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Tweet => "tweet",
        }
    }
}

/// One ordered element of an article body. `content` carries body text for
/// `text` blocks, an object URL for `image`/`video` blocks and a tweet
/// identifier for `tweet` blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweet_id: Option<String>,
}

impl ContentBlock {
    /// Check the per-kind field contract, then normalize. Runs on every
    /// block of a submitted sequence, on creation and update alike.
    pub fn validated(self) -> DomainResult<Self> {
        let has_content = self
            .content
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty());
        if !has_content {
            return Err(DomainError::Validation(format!(
                "{} block requires content",
                self.kind.as_str()
            )));
        }
        Ok(self.normalized())
    }

    /// Tweet blocks are always addressable through `tweet_id`, regardless of
    /// which legacy shape the client submitted: an absent or empty `tweet_id`
    /// is filled from `content`. Other kinds pass through unchanged.
    fn normalized(mut self) -> Self {
        if self.kind == BlockKind::Tweet && self.tweet_id.as_deref().is_none_or(str::is_empty) {
            self.tweet_id = self.content.clone();
        }
        self
    }

    /// Object-store key referenced by a video block, if one can be derived
    /// from its URL. Non-video blocks never carry a key.
    pub fn video_storage_key(&self) -> Option<String> {
        if self.kind != BlockKind::Video {
            return None;
        }
        storage_key_from_url(self.content.as_deref()?)
    }
}

/// Resolve a stored object URL back to its bucket key: the percent-decoded
/// URL path without the leading separator. Works for every key convention
/// that ever produced a stored URL (`<epoch-ms>_<name>`, `homePageVideo`,
/// `videos/<epoch-ms>-<name>`). Unparseable URLs and empty paths yield None.
pub fn storage_key_from_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let path = percent_decode_str(parsed.path()).decode_utf8().ok()?;
    let key = path.trim_start_matches('/');
    if key.is_empty() {
        None
    } else {
        Some(key.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet_block(content: &str, tweet_id: Option<&str>) -> ContentBlock {
        ContentBlock {
            kind: BlockKind::Tweet,
            content: Some(content.into()),
            caption: None,
            title: None,
            tweet_id: tweet_id.map(Into::into),
        }
    }

    #[test]
    fn tweet_block_without_id_is_normalized_from_content() {
        let block = tweet_block("12345", None).validated().unwrap();
        assert_eq!(block.tweet_id.as_deref(), Some("12345"));
    }

    #[test]
    fn tweet_block_with_empty_id_is_normalized_from_content() {
        let block = tweet_block("67890", Some("")).validated().unwrap();
        assert_eq!(block.tweet_id.as_deref(), Some("67890"));
    }

    #[test]
    fn tweet_block_with_explicit_id_is_untouched() {
        let block = tweet_block("irrelevant", Some("42")).validated().unwrap();
        assert_eq!(block.tweet_id.as_deref(), Some("42"));
    }

    #[test]
    fn block_without_content_is_rejected() {
        let block = ContentBlock {
            kind: BlockKind::Image,
            content: None,
            caption: None,
            title: None,
            tweet_id: None,
        };
        assert!(matches!(
            block.validated(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn storage_key_covers_every_naming_convention() {
        let cases = [
            (
                "https://newsbucket.s3.amazonaws.com/1733500000000_clip.mp4",
                "1733500000000_clip.mp4",
            ),
            (
                "https://newsbucket.s3.amazonaws.com/homePageVideo",
                "homePageVideo",
            ),
            (
                "https://newsbucket.storage.googleapis.com/videos/1733500000000-clip.mp4",
                "videos/1733500000000-clip.mp4",
            ),
        ];
        for (url, key) in cases {
            assert_eq!(storage_key_from_url(url).as_deref(), Some(key));
        }
    }

    #[test]
    fn storage_key_decodes_percent_escapes() {
        assert_eq!(
            storage_key_from_url("https://cdn.example.com/1733500000000_my%20clip.mp4").as_deref(),
            Some("1733500000000_my clip.mp4"),
        );
    }

    #[test]
    fn storage_key_rejects_garbage() {
        assert_eq!(storage_key_from_url("not a url"), None);
        assert_eq!(storage_key_from_url("https://host.example.com"), None);
        assert_eq!(storage_key_from_url(""), None);
    }

    #[test]
    fn video_storage_key_ignores_other_kinds() {
        let block = ContentBlock {
            kind: BlockKind::Image,
            content: Some("https://cdn.example.com/cover.png".into()),
            caption: None,
            title: None,
            tweet_id: None,
        };
        assert_eq!(block.video_storage_key(), None);
    }
}
