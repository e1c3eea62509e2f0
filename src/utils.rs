use actix_web::http::header::LOCATION;
use actix_web::HttpResponse;

/// Return an opaque 500 while preserving the error's root cause for logging.
pub fn e500<T>(e: T) -> actix_web::Error
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    actix_web::error::ErrorInternalServerError(e)
}

/// A 302 `Found` pointing at `location`.
///
/// Every redirect issued by this application goes through here: the
/// login-gating contract promises plain `Found` responses, both for denials
/// and for post-login/logout navigation.
pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}
