// src/presentation/http/controllers/carousel.rs
use crate::application::{commands::carousel::UploadCarouselImageCommand, dto::CarouselImageDto};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Multipart, extract::Path, http::StatusCode};
use serde::Serialize;

#[derive(Serialize)]
pub struct CarouselListResponse {
    pub message: String,
    pub images: Vec<CarouselImageDto>,
}

#[derive(Serialize)]
pub struct ImageUploadedResponse {
    pub message: String,
    pub id: String,
}

#[derive(Serialize)]
pub struct ImageDeletedResponse {
    pub message: String,
}

pub async fn list_images(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<CarouselListResponse>> {
    let images = state
        .services
        .carousel_queries
        .list_images()
        .await
        .into_http()?;

    Ok(Json(CarouselListResponse {
        message: format!("Found {} images", images.len()),
        images,
    }))
}

pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    mut multipart: Multipart,
) -> HttpResult<(StatusCode, Json<ImageUploadedResponse>)> {
    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(err.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let data = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(err.to_string()))?;
        file = Some((content_type, data));
        break;
    }
    let (content_type, data) =
        file.ok_or_else(|| HttpError::bad_request("no image file uploaded"))?;

    let stored = state
        .services
        .carousel_commands
        .upload_image(UploadCarouselImageCommand {
            content_type,
            data: data.to_vec(),
        })
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ImageUploadedResponse {
            message: "Image uploaded successfully".into(),
            id: stored.id,
        }),
    ))
}

pub async fn delete_image(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ImageDeletedResponse>> {
    state
        .services
        .carousel_commands
        .delete_image(&id)
        .await
        .into_http()?;

    Ok(Json(ImageDeletedResponse {
        message: "Image deleted successfully".into(),
    }))
}

pub async fn delete_all_images(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ImageDeletedResponse>> {
    state
        .services
        .carousel_commands
        .delete_all_images()
        .await
        .into_http()?;

    Ok(Json(ImageDeletedResponse {
        message: "All images deleted successfully".into(),
    }))
}
