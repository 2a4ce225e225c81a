// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ContentBlockInput},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Vec<ContentBlockInput>,
    pub status: Option<String>,
    pub is_main_featured: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub content: Option<Vec<ContentBlockInput>>,
    pub status: Option<String>,
    pub is_main_featured: Option<bool>,
}

#[derive(Serialize)]
pub struct ArticleListResponse {
    pub message: String,
    pub articles: Vec<ArticleDto>,
}

#[derive(Serialize)]
pub struct ArticleResponse {
    pub message: String,
    pub article: ArticleDto,
}

#[derive(Serialize)]
pub struct ArticleDeletedResponse {
    pub message: String,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            status: params.status,
            limit: params.limit,
        })
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse {
        message: format!("Found {} articles", articles.len()),
        articles,
    }))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    Ok(Json(ArticleResponse {
        message: "Article found".into(),
        article,
    }))
}

pub async fn get_main_featured(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_queries
        .get_main_featured()
        .await
        .into_http()?;

    Ok(Json(ArticleResponse {
        message: "Main featured article found".into(),
        article,
    }))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        tagline: payload.tagline,
        main_image: payload.main_image,
        author: payload.author,
        date: payload.date,
        content: payload.content,
        status: payload.status,
        is_main_featured: payload.is_main_featured,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ArticleResponse {
            message: "Article created successfully".into(),
            article,
        }),
    ))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        tagline: payload.tagline,
        main_image: payload.main_image,
        author: payload.author,
        date: payload.date,
        content: payload.content,
        status: payload.status,
        is_main_featured: payload.is_main_featured,
    };

    let article = state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;

    Ok(Json(ArticleResponse {
        message: "Article updated successfully".into(),
        article,
    }))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDeletedResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(ArticleDeletedResponse {
        message: "Article deleted".into(),
    }))
}
