use std::fmt::Formatter;

use actix_web::error::InternalError;
use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;
use secrecy::Secret;

use crate::authentication::{validate_credentials, AuthError, Credentials};
use crate::routes::error_chain_fmt;
use crate::session_state::TypedSession;
use crate::users::UserStore;
use crate::utils::redirect_to;

#[derive(serde::Deserialize)]
pub struct FormData {
    username: String,
    password: Secret<String>,
    next: Option<String>,
}

#[derive(thiserror::Error)]
pub enum LoginError {
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for LoginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[tracing::instrument(
    name = "Process a login attempt",
    skip(form, user_store, session),
    fields(username = tracing::field::Empty, user_id = tracing::field::Empty)
)]
pub async fn login(
    form: web::Form<FormData>,
    user_store: web::Data<UserStore>,
    session: TypedSession,
) -> Result<HttpResponse, InternalError<LoginError>> {
    let FormData {
        username,
        password,
        next,
    } = form.0;
    tracing::Span::current().record("username", &tracing::field::display(&username));
    let credentials = Credentials { username, password };

    match validate_credentials(credentials, &user_store).await {
        Ok(user_id) => {
            tracing::Span::current().record("user_id", &tracing::field::display(&user_id));
            let target = next
                .as_deref()
                .filter(|n| n.starts_with('/') && !n.starts_with("//"))
                .unwrap_or("/");
            let session_cookie = session.log_in(user_id);
            Ok(HttpResponse::Found()
                .insert_header((LOCATION, target))
                .cookie(session_cookie)
                .finish())
        }
        Err(e) => {
            let e = match e {
                AuthError::InvalidCredentials(_) => LoginError::AuthError(e.into()),
                AuthError::UnexpectedError(_) => LoginError::UnexpectedError(e.into()),
            };
            FlashMessage::error(e.to_string()).send();
            let redirect_target = match &next {
                Some(next) => format!("/accounts/login/?next={}", next),
                None => "/accounts/login/".to_string(),
            };
            let response = redirect_to(&redirect_target);
            Err(InternalError::from_response(e, response))
        }
    }
}
