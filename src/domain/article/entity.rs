use crate::domain::article::content::{BlockKind, ContentBlock};
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub tagline: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    pub date: DateTime<Utc>,
    pub content: Vec<ContentBlock>,
    pub status: ArticleStatus,
    pub is_main_featured: bool,
}

impl Article {
    pub fn video_blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.content.iter().filter(|b| b.kind == BlockKind::Video)
    }

    /// Overwrite exactly the fields the update carries; everything it omits
    /// keeps its stored value. A submitted `content` replaces the whole
    /// sequence.
    pub fn apply(&mut self, update: ArticleUpdate) {
        let ArticleUpdate {
            id: _,
            title,
            tagline,
            main_image,
            author,
            date,
            content,
            status,
            is_main_featured,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(tagline) = tagline {
            self.tagline = Some(tagline);
        }
        if let Some(main_image) = main_image {
            self.main_image = Some(main_image);
        }
        if let Some(author) = author {
            self.author = Some(author);
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(is_main_featured) = is_main_featured {
            self.is_main_featured = is_main_featured;
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub tagline: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    pub date: DateTime<Utc>,
    pub content: Vec<ContentBlock>,
    pub status: ArticleStatus,
    pub is_main_featured: bool,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub tagline: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub content: Option<Vec<ContentBlock>>,
    pub status: Option<ArticleStatus>,
    pub is_main_featured: Option<bool>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            title: None,
            tagline: None,
            main_image: None,
            author: None,
            date: None,
            content: None,
            status: None,
            is_main_featured: None,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    pub fn with_main_image(mut self, main_image: impl Into<String>) -> Self {
        self.main_image = Some(main_image.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_content(mut self, content: Vec<ContentBlock>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_main_featured(mut self, is_main_featured: bool) -> Self {
        self.is_main_featured = Some(is_main_featured);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.tagline.is_none()
            && self.main_image.is_none()
            && self.author.is_none()
            && self.date.is_none()
            && self.content.is_none()
            && self.status.is_none()
            && self.is_main_featured.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_block(body: &str) -> ContentBlock {
        ContentBlock {
            kind: BlockKind::Text,
            content: Some(body.into()),
            caption: None,
            title: None,
            tweet_id: None,
        }
    }

    fn sample_article() -> Article {
        Article {
            id: ArticleId::generate(),
            title: ArticleTitle::new("headline").unwrap(),
            tagline: Some("the tagline".into()),
            main_image: None,
            author: Some("newsroom".into()),
            date: Utc::now(),
            content: vec![text_block("first"), text_block("second")],
            status: ArticleStatus::Draft,
            is_main_featured: false,
        }
    }

    #[test]
    fn apply_overwrites_only_supplied_fields() {
        let mut article = sample_article();
        let original_content = article.content.clone();
        let original_tagline = article.tagline.clone();

        article.apply(ArticleUpdate::new(article.id).with_status(ArticleStatus::Published));

        assert_eq!(article.status, ArticleStatus::Published);
        assert_eq!(article.content, original_content);
        assert_eq!(article.tagline, original_tagline);
    }

    #[test]
    fn apply_replaces_whole_content_sequence() {
        let mut article = sample_article();
        let replacement = vec![text_block("only")];
        article.apply(ArticleUpdate::new(article.id).with_content(replacement.clone()));
        assert_eq!(article.content, replacement);
    }

    #[test]
    fn empty_update_reports_itself() {
        let update = ArticleUpdate::new(ArticleId::generate());
        assert!(update.is_empty());
        assert!(!update.with_main_featured(true).is_empty());
    }
}
