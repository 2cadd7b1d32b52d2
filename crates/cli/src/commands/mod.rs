//! Command implementations for the Pocketmart CLI.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod profile;

use pocketmart_client::ClientError;
use pocketmart_client::session::SessionError;
use pocketmart_core::types::EmailError;
use thiserror::Error;

/// Errors a CLI command can surface.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The email argument failed validation before any request was made.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// A catalog or backend call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Session storage failed.
    #[error("Session storage error: {0}")]
    Session(#[from] SessionError),

    /// Reading interactive input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The command needs a signed-in user.
    #[error("Not signed in - run `pm-cli auth signin` first")]
    NotSignedIn,
}
