use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

/// A plain members-only page. The session guard in front of this route does
/// all the work; anything that reaches the handler is allowed through.
pub async fn protected_resource() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Members area</title>
</head>
<body>
    <p>This content is only visible to signed-in users.</p>
</body>
</html>"#,
    )
}
