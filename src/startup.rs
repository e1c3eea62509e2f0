use std::net::TcpListener;

use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_lab::middleware::from_fn;
use secrecy::ExposeSecret;
use tracing_actix_web::TracingLogger;

use crate::authentication::{reject_invalid_sessions, require_superuser};
use crate::configuration::Settings;
use crate::routes::{
    admin_dashboard, health_check, home, log_out, login, login_form, protected_resource,
};
use crate::session_store::SessionStore;
use crate::users::UserStore;

pub fn run(
    listener: TcpListener,
    user_store: UserStore,
    session_store: SessionStore,
    configuration: Settings,
) -> Result<Server, anyhow::Error> {
    let message_store = CookieMessageStore::builder(Key::from(
        configuration.application.hmac_secret.expose_secret().as_bytes(),
    ))
    .build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let user_store = web::Data::new(user_store);
    let session_store = web::Data::new(session_store);
    let session_settings = web::Data::new(configuration.session);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/accounts")
                    .route("/login/", web::get().to(login_form))
                    .route("/login/", web::post().to(login))
                    .route("/logout/", web::post().to(log_out)),
            )
            .service(
                web::scope("/admin")
                    // Outermost guard runs first: session validity, then the
                    // superuser check on whatever identity it injected.
                    .wrap(from_fn(require_superuser))
                    .wrap(from_fn(reject_invalid_sessions))
                    .route("/", web::get().to(admin_dashboard)),
            )
            .service(
                web::scope("/protected")
                    .wrap(from_fn(reject_invalid_sessions))
                    .route("/", web::get().to(protected_resource)),
            )
            .app_data(user_store.clone())
            .app_data(session_store.clone())
            .app_data(session_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
