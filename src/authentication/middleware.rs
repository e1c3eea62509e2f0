use std::ops::Deref;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::error::InternalError;
use actix_web::{web, FromRequest, HttpMessage};
use actix_web_lab::middleware::Next;
use uuid::Uuid;

use crate::session_state::TypedSession;
use crate::users::UserStore;
use crate::utils::{e500, redirect_to};

#[derive(Copy, Clone, Debug)]
pub struct UserId(Uuid);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Deref for UserId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Gate a scope behind a valid, non-expired, authenticated session.
///
/// On success the owning [`UserId`] is injected into the request extensions
/// for downstream handlers. Anonymous, logged-out and expired sessions are
/// all answered with a redirect to the login page carrying the originally
/// requested path as the `next` query parameter.
pub async fn reject_invalid_sessions(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = {
        let (http_request, payload) = req.parts_mut();
        TypedSession::from_request(http_request, payload).await
    }?;

    match session.user_id() {
        Some(user_id) => {
            req.extensions_mut().insert(UserId(user_id));
            next.call(req).await
        }
        None => {
            let response = redirect_to(&login_redirect_target(req.path()));
            let e = anyhow::anyhow!("The caller does not have a valid authenticated session.");
            Err(InternalError::from_response(e, response).into())
        }
    }
}

/// Gate a scope behind the superuser flag.
///
/// Must run after [`reject_invalid_sessions`], which is responsible for
/// putting the [`UserId`] into the request extensions. Signed-in users
/// without the flag get the same login redirect as anonymous callers -
/// never a 200.
pub async fn require_superuser(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let user_id = req.extensions().get::<UserId>().copied();
    let Some(user_id) = user_id else {
        return Err(e500(anyhow::anyhow!(
            "No UserId in request extensions; is the session guard mounted?"
        )));
    };
    let user_store = req
        .app_data::<web::Data<UserStore>>()
        .cloned()
        .ok_or_else(|| e500(anyhow::anyhow!("The user store is not configured.")))?;

    let is_superuser = user_store
        .find_by_id(*user_id)
        .map(|user| user.is_superuser)
        .unwrap_or(false);

    if is_superuser {
        next.call(req).await
    } else {
        let response = redirect_to(&login_redirect_target(req.path()));
        let e = anyhow::anyhow!("The signed-in user is not a superuser.");
        Err(InternalError::from_response(e, response).into())
    }
}

fn login_redirect_target(requested_path: &str) -> String {
    format!("/accounts/login/?next={}", requested_path)
}
