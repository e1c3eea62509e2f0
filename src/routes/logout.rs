use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;

use crate::session_state::TypedSession;
use crate::utils::redirect_to;

/// Clear the session's authenticated-user association.
///
/// Logout wins over any expiry policy: even a session configured to never
/// expire is anonymous once this has run.
pub async fn log_out(session: TypedSession) -> HttpResponse {
    let was_signed_in = session.user_id().is_some();
    session.log_out();
    if was_signed_in {
        FlashMessage::info("You have successfully logged out.").send();
    }
    redirect_to("/accounts/login/")
}
