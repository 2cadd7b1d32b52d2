//! Authentication commands.
//!
//! # Usage
//!
//! ```bash
//! pm-cli auth signin -e user@example.com -p secret
//! pm-cli auth signup -n "Ada" -e ada@example.com -p secret
//! pm-cli auth signout
//! ```
//!
//! A successful sign-in/sign-up persists the profile and bearer token via
//! the session store; orders and profile commands read it back.

use pocketmart_client::AppState;
use pocketmart_client::backend::UserSession;
use pocketmart_client::session::{StoredSession, clear_session, load_session, save_session};
use pocketmart_core::types::Email;

use super::CommandError;

/// Sign in and persist the session.
pub async fn sign_in(state: &AppState, email: &str, password: &str) -> Result<(), CommandError> {
    let email = Email::parse(email)?;
    let session = state.backend().sign_in(&email, password).await?;
    persist(state, session)
}

/// Create an account, sign in, and persist the session.
pub async fn sign_up(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), CommandError> {
    let email = Email::parse(email)?;
    let session = state.backend().sign_up(name, &email, password).await?;
    persist(state, session)
}

/// Forget the stored session.
pub fn sign_out(state: &AppState) -> Result<(), CommandError> {
    clear_session(state.session())?;
    println!("Signed out.");
    Ok(())
}

/// Load the stored session or tell the user to sign in.
pub fn require_session(state: &AppState) -> Result<StoredSession, CommandError> {
    load_session(state.session())?.ok_or(CommandError::NotSignedIn)
}

fn persist(state: &AppState, session: UserSession) -> Result<(), CommandError> {
    let name = session.user.name.clone();
    let stored = StoredSession::new(session.user, &session.token);
    save_session(state.session(), &stored)?;
    println!("Signed in as {name}.");
    Ok(())
}
