// src/presentation/http/controllers/media.rs
use crate::application::{
    commands::media::{UploadHomepageVideoCommand, UploadVideoCommand},
    queries::media::SignedVideoUrlQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Multipart};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoUploadedResponse {
    pub message: String,
    pub video_url: String,
}

#[derive(Serialize)]
pub struct HomepageVideoResponse {
    pub message: String,
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct VideoUrlRequest {
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Serialize)]
pub struct VideoUrlResponse {
    pub message: String,
    pub url: String,
}

struct UploadedFile {
    filename: String,
    content_type: String,
    data: Bytes,
}

/// Pull the named file field out of a multipart body. Other fields are
/// ignored, matching the single-file upload contract.
async fn read_file_field(
    multipart: &mut Multipart,
    field_name: &str,
) -> HttpResult<Option<UploadedFile>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(err.to_string()))?
    {
        if field.name() != Some(field_name) {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let data = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(err.to_string()))?;
        return Ok(Some(UploadedFile {
            filename,
            content_type,
            data,
        }));
    }
    Ok(None)
}

pub async fn upload_video(
    Extension(state): Extension<HttpState>,
    mut multipart: Multipart,
) -> HttpResult<Json<VideoUploadedResponse>> {
    let file = read_file_field(&mut multipart, "video")
        .await?
        .ok_or_else(|| HttpError::bad_request("no video file uploaded"))?;

    let uploaded = state
        .services
        .media_commands
        .upload_video(UploadVideoCommand {
            filename: file.filename,
            content_type: file.content_type,
            data: file.data,
        })
        .await
        .into_http()?;

    Ok(Json(VideoUploadedResponse {
        message: "Video uploaded successfully".into(),
        video_url: uploaded.url,
    }))
}

pub async fn upload_homepage_video(
    Extension(state): Extension<HttpState>,
    mut multipart: Multipart,
) -> HttpResult<Json<HomepageVideoResponse>> {
    let file = read_file_field(&mut multipart, "video")
        .await?
        .ok_or_else(|| HttpError::bad_request("no video file uploaded"))?;

    let stored = state
        .services
        .media_commands
        .upload_homepage_video(UploadHomepageVideoCommand {
            content_type: file.content_type,
            data: file.data,
        })
        .await
        .into_http()?;

    Ok(Json(HomepageVideoResponse {
        message: "Video uploaded successfully".into(),
        bucket: stored.bucket,
        key: stored.key,
    }))
}

pub async fn get_video_url(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<VideoUrlRequest>,
) -> HttpResult<Json<VideoUrlResponse>> {
    let url = state
        .services
        .media_queries
        .signed_video_url(SignedVideoUrlQuery { key: payload.key })
        .await
        .into_http()?;

    Ok(Json(VideoUrlResponse {
        message: "Video URL generated".into(),
        url,
    }))
}
