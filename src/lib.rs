//! A REST API for managing bank accounts.
//!
//! Accounts live in an in-memory [AccountStore] shared by the route handlers
//! through [AppState]. Nothing is persisted between runs of the server.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod account;
mod app_state;
mod endpoints;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;

pub use account::{Account, AccountId, AccountStore, NewAccount};
pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{
    internal_server_error::get_internal_server_error_response,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// No account has the requested ID.
    ///
    /// The client should check that the ID is correct and that the account
    /// has not been deleted.
    #[error("could not find an account with the ID {0}")]
    AccountNotFound(AccountId),

    /// Every account id has been handed out, so a new account cannot be given one.
    #[error("the account id sequence is exhausted")]
    IdSequenceExhausted,

    /// Could not acquire the account store lock because another thread
    /// panicked while holding it.
    #[error("could not acquire the account store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::AccountNotFound(_) => get_404_not_found_response(&self.to_string()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                get_internal_server_error_response()
            }
        }
    }
}
