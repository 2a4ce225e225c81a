// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, carousel, media};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use serde_json::json;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

// Matches the upload limit the site has always enforced.
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/articles/featured/main",
            get(articles::get_main_featured),
        )
        .route(
            "/api/articles/{id}",
            get(articles::get_article)
                .patch(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/uploadvideo", post(media::upload_video))
        .route("/api/homepagevideo", post(media::upload_homepage_video))
        .route("/api/getVideoUrl", post(media::get_video_url))
        .route(
            "/api/carousel-images",
            get(carousel::list_images)
                .post(carousel::upload_image)
                .delete(carousel::delete_all_images),
        )
        .route("/api/carousel-images/{id}", delete(carousel::delete_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
