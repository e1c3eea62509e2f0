use std::future::{ready, Ready};

use actix_web::cookie::Cookie;
use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use chrono::Utc;
use uuid::Uuid;

use crate::configuration::SessionSettings;
use crate::session_store::SessionStore;

/// Strongly-typed view over the caller's session.
///
/// Reads the session token from the request cookie and resolves it against
/// the application's [`SessionStore`]. Handlers that change the logged-in
/// state get a cookie back to attach to their response.
pub struct TypedSession {
    store: web::Data<SessionStore>,
    cookie_name: String,
    token: Option<String>,
}

impl TypedSession {
    /// The authenticated owner of the current session, if it is still valid.
    pub fn user_id(&self) -> Option<Uuid> {
        self.token
            .as_deref()
            .and_then(|token| self.store.authenticated_user(token, Utc::now()))
    }

    /// Rotate the session and associate it with `user_id`.
    ///
    /// The previous session, if any, is discarded. The returned cookie must
    /// be attached to the response for the client to pick up the new token.
    pub fn log_in(&self, user_id: Uuid) -> Cookie<'static> {
        if let Some(old_token) = self.token.as_deref() {
            self.store.remove(old_token);
        }
        let token = self.store.create(user_id);
        Cookie::build(self.cookie_name.clone(), token)
            .path("/")
            .http_only(true)
            .finish()
    }

    /// Drop the authenticated-user association. The record survives as an
    /// anonymous session, which is all a logged-out cookie is worth.
    pub fn log_out(&self) {
        if let Some(token) = self.token.as_deref() {
            self.store.clear_user(token);
        }
    }
}

impl FromRequest for TypedSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let store = req.app_data::<web::Data<SessionStore>>().cloned();
        let settings = req.app_data::<web::Data<SessionSettings>>().cloned();
        ready(match (store, settings) {
            (Some(store), Some(settings)) => {
                let token = req
                    .cookie(&settings.cookie_name)
                    .map(|cookie| cookie.value().to_owned());
                Ok(TypedSession {
                    store,
                    cookie_name: settings.cookie_name.clone(),
                    token,
                })
            }
            _ => Err(actix_web::error::ErrorInternalServerError(
                "session state is not configured for this application",
            )),
        })
    }
}
