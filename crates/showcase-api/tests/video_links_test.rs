//! Video link API integration tests.
//!
//! Run with: `cargo test -p showcase-api --test video_links_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{api_path, setup_test_app, setup_test_app_without_tmp_dir};

fn video_part(bytes: Vec<u8>, file_name: &str, mime: &str) -> Part {
    Part::bytes(bytes::Bytes::from(bytes))
        .file_name(file_name)
        .mime_type(mime)
}

#[tokio::test]
async fn test_accepts_video_url() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("title", "Launch trailer")
        .add_text("video", "https://videos.example.com/launch.mp4");

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 201);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Launch trailer");
    assert_eq!(body["data"]["video"]["kind"], "url");
    assert_eq!(
        body["data"]["video"]["url"],
        "https://videos.example.com/launch.mp4"
    );
}

#[tokio::test]
async fn test_video_is_optional() {
    let app = setup_test_app();
    let form = MultipartForm::new().add_text("title", "No video yet");

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 201);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["video"]["kind"], "none");
}

#[tokio::test]
async fn test_url_length_boundary() {
    let app = setup_test_app();

    let at_limit = format!("https://v.test/{}", "a".repeat(1000 - 15));
    assert_eq!(at_limit.chars().count(), 1000);
    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(
            MultipartForm::new()
                .add_text("title", "Boundary")
                .add_text("video", at_limit.clone()),
        )
        .await;
    assert_eq!(response.status_code(), 201);

    let over_limit = format!("{}a", at_limit);
    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(
            MultipartForm::new()
                .add_text("title", "Boundary")
                .add_text("video", over_limit),
        )
        .await;
    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "The given data was invalid.");
    assert_eq!(
        body["errors"]["video"][0],
        "The video URL must not exceed 1000 characters."
    );
}

#[tokio::test]
async fn test_accepts_video_upload_and_cleans_up() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("title", "Factory tour")
        .add_part("video", video_part(vec![0u8; 512], "tour.mp4", "video/mp4"));

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 201);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["video"]["kind"], "upload");
    assert_eq!(body["data"]["video"]["file_name"], "tour.mp4");
    assert_eq!(body["data"]["video"]["mime_type"], "video/mp4");
    assert_eq!(body["data"]["video"]["size_bytes"], 512);
    assert_eq!(app.spooled_file_count(), 0);
}

#[tokio::test]
async fn test_rejects_non_video_upload() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("title", "Brochure")
        .add_part(
            "video",
            video_part(b"%PDF-1.4".to_vec(), "brochure.pdf", "application/pdf"),
        );

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["errors"]["video"][0],
        "The video must be a valid video file (max 100MB) or a string URL."
    );
}

#[tokio::test]
async fn test_upload_over_server_limit_quotes_configured_limit() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("title", "Too big")
        .add_part("video", video_part(vec![0u8; 2048], "big.mp4", "video/mp4"));

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["errors"]["video"][0],
        "The file exceeds the upload_max_filesize directive in php.ini (currently 1K). \
         Please increase upload_max_filesize and post_max_size in php.ini to at least 100MB for videos."
    );
    assert_eq!(app.spooled_file_count(), 0);
}

#[tokio::test]
async fn test_form_size_limit_applies_to_following_file() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("title", "Form limited")
        .add_text("MAX_FILE_SIZE", "100")
        .add_part("video", video_part(vec![0u8; 200], "clip.mp4", "video/mp4"));

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["errors"]["video"][0],
        "The file exceeds the MAX_FILE_SIZE directive that was specified in the HTML form."
    );
}

#[tokio::test]
async fn test_blocked_extension_is_refused() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("title", "Sneaky")
        .add_part(
            "video",
            video_part(b"<?php echo 1;".to_vec(), "shell.php", "video/mp4"),
        );

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["errors"]["video"][0],
        "A PHP extension stopped the file upload."
    );
    assert_eq!(app.spooled_file_count(), 0);
}

#[tokio::test]
async fn test_empty_file_part_reports_no_file() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("title", "Empty")
        .add_part("video", video_part(Vec::new(), "empty.mp4", "video/mp4"));

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(body["errors"]["video"][0], "No file was uploaded.");
}

#[tokio::test]
async fn test_missing_temp_dir_is_reported() {
    let client = setup_test_app_without_tmp_dir();
    let form = MultipartForm::new()
        .add_text("title", "Nowhere to put it")
        .add_part("video", video_part(vec![1u8; 64], "clip.mp4", "video/mp4"));

    let response = client.post("/api/v1/video-links").multipart(form).await;

    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(body["errors"]["video"][0], "Missing a temporary folder.");
}

#[tokio::test]
async fn test_missing_title_and_bad_video_are_reported_together() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_part("video", video_part(vec![0u8; 16], "notes.txt", "text/plain"));

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(body["errors"]["title"][0], "The title field is required.");
    assert_eq!(
        body["errors"]["video"][0],
        "The video must be a valid video file (max 100MB) or a string URL."
    );
}

#[tokio::test]
async fn test_non_utf8_text_video_is_rejected() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("title", "Garbled")
        .add_part("video", Part::bytes(bytes::Bytes::from_static(&[0xff, 0xfe, 0x00])));

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["errors"]["video"][0],
        "The video must be a valid video file (max 100MB) or a string URL."
    );
}

#[tokio::test]
async fn test_unnamed_file_part_with_content_is_not_dropped() {
    let app = setup_test_app();

    for (bytes, mime) in [(vec![7u8; 900], "application/pdf"), (vec![0u8; 4096], "video/mp4")] {
        let form = MultipartForm::new()
            .add_text("title", "Nameless")
            .add_part("video", video_part(bytes, "", mime));

        let response = app
            .client()
            .post(&api_path("/video-links"))
            .multipart(form)
            .await;

        assert_eq!(response.status_code(), 422);
        let body: serde_json::Value = response.json();
        assert_eq!(body["errors"]["video"][0], "No file was uploaded.");
    }
    assert_eq!(app.spooled_file_count(), 0);
}

#[tokio::test]
async fn test_untouched_file_input_counts_as_absent() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("title", "Left blank")
        .add_part("video", video_part(Vec::new(), "", "application/octet-stream"));

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 201);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["video"]["kind"], "none");
}

#[tokio::test]
async fn test_truncated_upload_is_reported_as_partial() {
    let app = setup_test_app();
    let body = concat!(
        "--showcase-boundary\r\n",
        "Content-Disposition: form-data; name=\"title\"\r\n\r\n",
        "Cut off\r\n",
        "--showcase-boundary\r\n",
        "Content-Disposition: form-data; name=\"video\"; filename=\"a.mp4\"\r\n",
        "Content-Type: video/mp4\r\n\r\n",
        "0123456789abcdef"
    );

    let response = app
        .client()
        .post(&api_path("/video-links"))
        .bytes(bytes::Bytes::from_static(body.as_bytes()))
        .content_type("multipart/form-data; boundary=showcase-boundary")
        .await;

    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["errors"]["video"][0],
        "The file was only partially uploaded."
    );
    assert!(body["errors"].get("title").is_none());
    assert_eq!(app.spooled_file_count(), 0);
}
