use crate::helpers::{assert_is_redirect_to, spawn_app};

#[tokio::test]
async fn an_error_flash_message_is_set_on_failure() {
    // arrange
    let app = spawn_app().await;
    let login_body = serde_json::json!({
        "username": "nonexistent",
        "password": "wrongpass"
    });

    // act
    let response = app.post_login(&login_body).await;
    let html_page = app.get_login_html().await;
    let html_page_without_failure = app.get_login_html().await;

    // assert
    assert_is_redirect_to(&response, "/accounts/login/");
    assert!(html_page.contains(r#"<p><i>Authentication failed</i></p>"#));
    assert!(!html_page_without_failure.contains(r#"<p><i>Authentication failed</i></p>"#));
}

#[tokio::test]
async fn unknown_credentials_do_not_create_a_session() {
    // arrange
    let app = spawn_app().await;
    let login_body = serde_json::json!({
        "username": "nonexistent",
        "password": "wrongpass"
    });

    // act
    let response = app.post_login(&login_body).await;
    let admin_response = app.get_admin_dashboard().await;
    let login_page = app.get_login().await;

    // assert - the failed attempt left the caller anonymous
    assert_is_redirect_to(&response, "/accounts/login/");
    assert_is_redirect_to(&admin_response, "/accounts/login/?next=/admin/");
    assert_eq!(login_page.status().as_u16(), 200);
}

#[tokio::test]
async fn a_wrong_password_is_rejected_for_an_existing_user() {
    // arrange
    let app = spawn_app().await;
    let login_body = serde_json::json!({
        "username": &app.test_user.username,
        "password": "definitely-not-the-password"
    });

    // act
    let response = app.post_login(&login_body).await;
    let protected_response = app.get_protected().await;

    // assert
    assert_is_redirect_to(&response, "/accounts/login/");
    assert_is_redirect_to(&protected_response, "/accounts/login/?next=/protected/");
}

#[tokio::test]
async fn login_without_a_next_target_lands_on_the_home_page() {
    // arrange
    let app = spawn_app().await;
    let login_body = serde_json::json!({
        "username": &app.test_user.username,
        "password": &app.test_user.password
    });

    // act
    let response = app.post_login(&login_body).await;

    // assert
    assert_is_redirect_to(&response, "/");
}

#[tokio::test]
async fn login_returns_the_caller_to_the_originally_requested_path() {
    // arrange
    let app = spawn_app().await;

    // act - hit the protected resource first, then log in with the `next`
    // value the redirect handed back
    let denied = app.get_protected().await;
    assert_is_redirect_to(&denied, "/accounts/login/?next=/protected/");

    let login_body = serde_json::json!({
        "username": &app.test_user.username,
        "password": &app.test_user.password,
        "next": "/protected/"
    });
    let response = app.post_login(&login_body).await;
    let protected_response = app.get_protected().await;

    // assert
    assert_is_redirect_to(&response, "/protected/");
    assert_eq!(protected_response.status().as_u16(), 200);
}

#[tokio::test]
async fn the_login_page_is_always_available() {
    // arrange
    let app = spawn_app().await;

    // assert - anonymous
    assert_eq!(app.get_login().await.status().as_u16(), 200);

    // assert - signed in
    let login_body = serde_json::json!({
        "username": &app.test_user.username,
        "password": &app.test_user.password
    });
    app.post_login(&login_body).await;
    assert_eq!(app.get_login().await.status().as_u16(), 200);

    // assert - expired session
    app.set_session_expiry(Some(0));
    assert_eq!(app.get_login().await.status().as_u16(), 200);

    // assert - logged out
    app.post_logout().await;
    assert_eq!(app.get_login().await.status().as_u16(), 200);
}
