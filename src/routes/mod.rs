mod admin;
mod health_check;
mod home;
mod login;
mod logout;
mod protected;

pub use admin::*;
pub use health_check::*;
pub use home::*;
pub use login::*;
pub use logout::*;
pub use protected::*;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
