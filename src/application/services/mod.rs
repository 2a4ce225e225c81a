// src/application/services/mod.rs
pub mod media_cleanup;

use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, carousel::CarouselCommandService,
            media::MediaCommandService,
        },
        ports::{object_store::ObjectStore, time::Clock},
        queries::{
            articles::ArticleQueryService, carousel::CarouselQueryService,
            media::MediaQueryService,
        },
        services::media_cleanup::MediaCleanupService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        carousel::CarouselImageRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub media_commands: Arc<MediaCommandService>,
    pub media_queries: Arc<MediaQueryService>,
    pub carousel_commands: Arc<CarouselCommandService>,
    pub carousel_queries: Arc<CarouselQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        carousel_repo: Arc<dyn CarouselImageRepository>,
        object_store: Arc<dyn ObjectStore>,
        clock: Arc<dyn Clock>,
        signed_url_ttl: Duration,
    ) -> Self {
        let media_cleanup = Arc::new(MediaCleanupService::new(Arc::clone(&object_store)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&media_cleanup),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        let media_commands = Arc::new(MediaCommandService::new(
            Arc::clone(&object_store),
            Arc::clone(&clock),
        ));
        let media_queries = Arc::new(MediaQueryService::new(
            Arc::clone(&object_store),
            signed_url_ttl,
        ));

        let carousel_commands = Arc::new(CarouselCommandService::new(
            Arc::clone(&carousel_repo),
            Arc::clone(&clock),
        ));
        let carousel_queries = Arc::new(CarouselQueryService::new(Arc::clone(&carousel_repo)));

        Self {
            article_commands,
            article_queries,
            media_commands,
            media_queries,
            carousel_commands,
            carousel_queries,
        }
    }
}
