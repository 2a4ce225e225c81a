// tests/support/mod.rs
#![allow(dead_code)]
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pressroom::application::error::{ApplicationError, ApplicationResult};
use pressroom::application::ports::{object_store::ObjectStore, time::Clock};
use pressroom::application::services::ApplicationServices;
use pressroom::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use pressroom::domain::carousel::{
    CarouselImage, CarouselImageId, CarouselImageRepository, NewCarouselImage,
};
use pressroom::domain::errors::{DomainError, DomainResult};

pub struct InMemoryArticleRepo {
    inner: Mutex<HashMap<ArticleId, Article>>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = ArticleId::generate();
        let article = Article {
            id,
            title: article.title,
            tagline: article.tagline,
            main_image: article.main_image,
            author: article.author,
            date: article.date,
            content: article.content,
            status: article.status,
            is_main_featured: article.is_main_featured,
        };
        self.inner.lock().unwrap().insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        let article = map
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.apply(update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self, status: Option<ArticleStatus>, limit: u32) -> DomainResult<Vec<Article>> {
        let map = self.inner.lock().unwrap();
        let mut articles: Vec<Article> = map
            .values()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.date.cmp(&a.date));
        articles.truncate(limit as usize);
        Ok(articles)
    }

    async fn find_main_featured(&self) -> DomainResult<Option<Article>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .filter(|a| a.is_main_featured && a.status == ArticleStatus::Published)
            .max_by_key(|a| a.date)
            .cloned())
    }
}

pub struct InMemoryCarouselRepo {
    inner: Mutex<HashMap<CarouselImageId, CarouselImage>>,
}

impl InMemoryCarouselRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CarouselImageRepository for InMemoryCarouselRepo {
    async fn insert(&self, image: NewCarouselImage) -> DomainResult<CarouselImage> {
        let id = CarouselImageId::generate();
        let image = CarouselImage {
            id,
            data: image.data,
            content_type: image.content_type,
            created_at: image.created_at,
            updated_at: image.created_at,
        };
        self.inner.lock().unwrap().insert(id, image.clone());
        Ok(image)
    }

    async fn list(&self) -> DomainResult<Vec<CarouselImage>> {
        Ok(self.inner.lock().unwrap().values().cloned().collect())
    }

    async fn delete(&self, id: CarouselImageId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("image not found".into()))
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let mut map = self.inner.lock().unwrap();
        let removed = map.len() as u64;
        map.clear();
        Ok(removed)
    }
}

/// Object-store double that records every call. Keys listed in
/// `failing_keys` make `delete` return an error, so cleanup paths can be
/// exercised against a misbehaving bucket.
pub struct RecordingObjectStore {
    pub puts: Mutex<Vec<(String, String, usize)>>,
    pub deletes: Mutex<Vec<String>>,
    pub failing_keys: Mutex<HashSet<String>>,
}

impl RecordingObjectStore {
    pub fn new() -> Self {
        Self {
            puts: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
            failing_keys: Mutex::new(HashSet::new()),
        }
    }

    pub fn fail_deletes_for(&self, key: &str) {
        self.failing_keys.lock().unwrap().insert(key.to_owned());
    }

    pub fn recorded_deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }

    pub fn recorded_puts(&self) -> Vec<(String, String, usize)> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for RecordingObjectStore {
    fn bucket(&self) -> &str {
        "test-bucket"
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://test-bucket.storage.example.com/{key}")
    }

    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> ApplicationResult<()> {
        self.puts
            .lock()
            .unwrap()
            .push((key.to_owned(), content_type.to_owned(), data.len()));
        Ok(())
    }

    async fn delete(&self, key: &str) -> ApplicationResult<()> {
        self.deletes.lock().unwrap().push(key.to_owned());
        if self.failing_keys.lock().unwrap().contains(key) {
            return Err(ApplicationError::object_store("simulated delete failure"));
        }
        Ok(())
    }

    async fn signed_url(&self, key: &str, expires_in: Duration) -> ApplicationResult<String> {
        Ok(format!("signed:{key}:{}", expires_in.as_secs()))
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap()
}

pub struct TestHarness {
    pub services: ApplicationServices,
    pub articles: Arc<InMemoryArticleRepo>,
    pub carousel: Arc<InMemoryCarouselRepo>,
    pub store: Arc<RecordingObjectStore>,
}

pub fn harness() -> TestHarness {
    let articles = Arc::new(InMemoryArticleRepo::new());
    let carousel = Arc::new(InMemoryCarouselRepo::new());
    let store = Arc::new(RecordingObjectStore::new());
    let clock = Arc::new(FixedClock(fixed_now()));

    let services = ApplicationServices::new(
        Arc::clone(&articles) as Arc<dyn ArticleWriteRepository>,
        Arc::clone(&articles) as Arc<dyn ArticleReadRepository>,
        Arc::clone(&carousel) as Arc<dyn CarouselImageRepository>,
        Arc::clone(&store) as Arc<dyn ObjectStore>,
        clock,
        Duration::from_secs(3600),
    );

    TestHarness {
        services,
        articles,
        carousel,
        store,
    }
}
