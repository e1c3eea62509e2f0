use crate::helpers::{assert_is_redirect_to, spawn_app, TestApp};

async fn login_test_user(app: &TestApp) {
    let login_body = serde_json::json!({
        "username": &app.test_user.username,
        "password": &app.test_user.password
    });
    let response = app.post_login(&login_body).await;
    assert_is_redirect_to(&response, "/");
}

#[tokio::test]
async fn the_protected_resource_requires_a_session() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.get_protected().await;

    // assert
    assert_is_redirect_to(&response, "/accounts/login/?next=/protected/");
}

#[tokio::test]
async fn a_logged_in_user_can_access_the_protected_resource() {
    // arrange
    let app = spawn_app().await;
    login_test_user(&app).await;

    // act
    let response = app.get_protected().await;

    // assert
    assert_eq!(
        response.status().as_u16(),
        200,
        "Initial protected view access should succeed"
    );
}

#[tokio::test]
async fn an_expired_logged_out_session_is_redirected_to_login() {
    // arrange
    let app = spawn_app().await;
    login_test_user(&app).await;
    assert_eq!(app.get_protected().await.status().as_u16(), 200);

    // act - expire the session, then clear any remaining authentication
    app.set_session_expiry(Some(0));
    app.post_logout().await;
    let response = app.get_protected().await;

    // assert
    assert_is_redirect_to(&response, "/accounts/login/?next=/protected/");
}

#[tokio::test]
async fn expire_at_browser_close_denies_subsequent_requests() {
    // arrange
    let app = spawn_app().await;
    login_test_user(&app).await;
    assert_eq!(app.get_protected().await.status().as_u16(), 200);

    // act - no logout: the expiry mutation alone must be enough, since a
    // server-side check after the fact already sees the session as lapsed
    app.set_session_expiry(Some(0));
    let response = app.get_protected().await;

    // assert
    assert_is_redirect_to(&response, "/accounts/login/?next=/protected/");
}

#[tokio::test]
async fn a_fixed_duration_session_stays_valid_within_its_window() {
    // arrange
    let app = spawn_app().await;
    login_test_user(&app).await;

    // act
    app.set_session_expiry(Some(3600));
    let response = app.get_protected().await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn disabling_expiry_without_logout_keeps_the_session_alive() {
    // arrange
    let app = spawn_app().await;
    login_test_user(&app).await;
    assert_eq!(
        app.get_protected().await.status().as_u16(),
        200,
        "Initial protected view access should succeed"
    );

    // act - disable expiration entirely and come back without logging out
    app.set_session_expiry(None);
    let response = app.get_protected().await;

    // assert - KNOWN GAP, asserted on purpose: nothing ever ages such a
    // session out. The store only invalidates on a lapsed policy or an
    // explicit logout; there is no independent wall-clock timeout that
    // could override a never-expire policy. If this assertion starts
    // failing, an age-out mechanism has been added and this test (plus the
    // session store docs) must be updated to describe the new behavior.
    assert_eq!(
        response.status().as_u16(),
        200,
        "A never-expire session is currently accepted indefinitely"
    );
}
