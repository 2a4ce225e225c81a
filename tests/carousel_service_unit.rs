mod support;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use pressroom::application::commands::carousel::UploadCarouselImageCommand;
use pressroom::application::error::ApplicationError;
use pressroom::domain::errors::DomainError;
use support::harness;

#[tokio::test]
async fn upload_stores_bytes_and_returns_them_base64_encoded() {
    let h = harness();

    let stored = h
        .services
        .carousel_commands
        .upload_image(UploadCarouselImageCommand {
            content_type: "image/png".into(),
            data: vec![0x89, 0x50, 0x4e, 0x47],
        })
        .await
        .unwrap();

    assert_eq!(stored.content_type, "image/png");
    assert_eq!(
        BASE64.decode(&stored.data).unwrap(),
        vec![0x89, 0x50, 0x4e, 0x47]
    );

    let listed = h.services.carousel_queries.list_images().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, stored.id);
}

#[tokio::test]
async fn upload_rejects_non_image_payloads() {
    let h = harness();

    let err = h
        .services
        .carousel_commands
        .upload_image(UploadCarouselImageCommand {
            content_type: "video/mp4".into(),
            data: vec![1, 2, 3],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn delete_missing_image_is_not_found() {
    let h = harness();

    let err = h
        .services
        .carousel_commands
        .delete_image(&uuid::Uuid::new_v4().to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::NotFound(_))));
}

#[tokio::test]
async fn delete_rejects_malformed_ids() {
    let h = harness();

    let err = h
        .services
        .carousel_commands
        .delete_image("not-an-id")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidId(_))
    ));
}

#[tokio::test]
async fn delete_all_reports_how_many_went_away() {
    let h = harness();

    for _ in 0..3 {
        h.services
            .carousel_commands
            .upload_image(UploadCarouselImageCommand {
                content_type: "image/jpeg".into(),
                data: vec![0xff, 0xd8],
            })
            .await
            .unwrap();
    }

    let removed = h
        .services
        .carousel_commands
        .delete_all_images()
        .await
        .unwrap();
    assert_eq!(removed, 3);

    assert!(h.services.carousel_queries.list_images().await.unwrap().is_empty());
}
