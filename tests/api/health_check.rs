use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.get_health_check().await;

    // assert
    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}
