use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_reports_correctly() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.health_check().await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().is_empty());
}
