use crate::helpers::{spawn_app, spawn_app_with_title};

#[tokio::test]
async fn home_returns_200_and_mentions_docker() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.get_home().await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Docker"));
}

#[tokio::test]
async fn home_is_served_as_html() {
    let app = spawn_app().await;

    let response = app.get_home().await;

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn home_renders_configured_title_escaped() {
    // arrange
    let app = spawn_app_with_title(Some("Fish & Chips")).await;

    // act
    let response = app.get_home().await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("<title>Fish &amp; Chips</title>"));
    assert!(body.contains("Docker"));
}

#[tokio::test]
async fn home_is_stable_across_requests() {
    let app = spawn_app().await;

    for _ in 0..3 {
        let response = app.get_home().await;
        assert_eq!(response.status().as_u16(), 200);
        assert!(response.text().await.unwrap().contains("Docker"));
    }
}

#[tokio::test]
async fn head_on_home_returns_200_without_body() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.head_home().await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().is_empty());
}
