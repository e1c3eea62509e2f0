use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::authentication::UserId;
use crate::users::UserStore;
use crate::utils::e500;

/// Superuser landing page. Both guards have already run by the time this
/// handler is reached: the caller is authenticated and carries the flag.
pub async fn admin_dashboard(
    user_id: web::ReqData<UserId>,
    user_store: web::Data<UserStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = user_id.into_inner();
    let username = user_store
        .find_by_id(*user_id)
        .map(|user| user.username)
        .ok_or_else(|| e500(anyhow::anyhow!("Unknown user id in a validated session.")))?;

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(format!(
        r#"<!DOCTYPE html><html lang="en">
        <head>
            <meta http-equiv="content-type" content="text/html; charset=utf-8">
            <title>Admin dashboard</title>
        </head>
        <body>
            <p>Welcome {username}!</p>
            <form name="logoutForm" action="/accounts/logout/" method="post">
                <input type="submit" value="Logout">
            </form>
        </body>
        </html>
        "#
    )))
}
