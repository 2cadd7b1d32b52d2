//! Profile commands.
//!
//! # Usage
//!
//! ```bash
//! pm-cli profile show
//! pm-cli profile update -n "New Name" -p newpass
//! ```

use pocketmart_client::AppState;
use pocketmart_client::session::{StoredSession, save_session};

use super::CommandError;
use super::auth::require_session;

/// Show the signed-in profile.
pub fn show(state: &AppState) -> Result<(), CommandError> {
    let session = require_session(state)?;
    println!("Name:  {}", session.user.name);
    println!("Email: {}", session.user.email);
    Ok(())
}

/// Update name and password, then refresh the stored session.
pub async fn update(state: &AppState, name: &str, password: &str) -> Result<(), CommandError> {
    let session = require_session(state)?;
    state
        .backend()
        .update_profile(&session.token(), name, password)
        .await?;

    // The backend keeps the token; only the display name changes locally
    let mut user = session.user.clone();
    user.name = name.to_owned();
    save_session(state.session(), &StoredSession::new(user, &session.token()))?;

    println!("Profile updated.");
    Ok(())
}
