use std::net::TcpListener;

use authgate::configuration::get_configuration;
use authgate::session_store::SessionStore;
use authgate::startup::run;
use authgate::telemetry::{get_subscriber, init_subscriber};
use authgate::users::UserStore;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("authgate".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // panic if we can't read config
    let configuration = get_configuration().expect("Failed to read configuration.");
    let user_store = UserStore::new();
    let session_store = SessionStore::new(configuration.session.default_ttl_seconds);
    let listener = TcpListener::bind(format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    ))
    .expect("Failed to bind address");
    run(listener, user_store, session_store, configuration)?.await?;
    Ok(())
}
