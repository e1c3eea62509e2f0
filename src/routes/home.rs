use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

/// Public landing page; the default target after a successful login.
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Home</title>
</head>
<body>
    <p>Welcome to authgate.</p>
    <ol>
        <li><a href="/accounts/login/">Login</a></li>
        <li><a href="/protected/">Members area</a></li>
    </ol>
</body>
</html>"#,
    )
}
