use std::fmt::Write;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    next: Option<String>,
}

/// The login page is public and always answers 200, whatever the caller's
/// session state. A `next` query value is carried through the form so the
/// caller lands back on the page they originally asked for.
pub async fn login_form(
    query: web::Query<QueryParams>,
    flash_messages: IncomingFlashMessages,
) -> HttpResponse {
    let mut notification_html = String::new();
    for m in flash_messages.iter() {
        writeln!(notification_html, "<p><i>{}</i></p>", m.content()).unwrap();
    }

    let next_field = match &query.next {
        Some(next) => format!(
            r#"<input type="hidden" name="next" value="{}">"#,
            htmlescape::encode_attribute(next)
        ),
        None => String::new(),
    };

    HttpResponse::Ok().content_type(ContentType::html()).body(format!(
        r#"<!DOCTYPE html><html lang="en">
        <head>
            <meta http-equiv="content-type" content="text/html; charset=utf-8">
            <title>Login</title>
        </head>
        <body>
            {notification_html}
            <form action="/accounts/login/" method="post">
                <label>Username
                    <input type="text" placeholder="Enter Username" name="username">
                </label>
                <br>
                <label>Password
                    <input type="password" placeholder="Enter Password" name="password">
                </label>
                {next_field}
                <button type="submit">Login</button>
            </form>
        </body>
        </html>
        "#
    ))
}
