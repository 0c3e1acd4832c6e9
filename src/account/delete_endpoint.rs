//! Defines the endpoint for deleting an account.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    account::{core::AccountId, store::AccountStore},
};

/// The state needed to delete an account.
#[derive(Debug, Clone)]
pub struct DeleteAccountState {
    /// The store for managing accounts.
    account_store: Arc<Mutex<AccountStore>>,
}

impl FromRef<AppState> for DeleteAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            account_store: state.account_store.clone(),
        }
    }
}

/// A route handler for deleting an account, responds with 204 No Content
/// whether or not the account existed.
pub async fn delete_account_endpoint(
    State(state): State<DeleteAccountState>,
    Path(account_id): Path<AccountId>,
) -> Response {
    let mut store = match state.account_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Could not acquire account store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    if !delete_account(account_id, &mut store) {
        tracing::debug!("Account {account_id} was already absent, nothing to delete");
    }

    StatusCode::NO_CONTENT.into_response()
}

type Deleted = bool;

fn delete_account(id: AccountId, store: &mut AccountStore) -> Deleted {
    match store.find_by_id(id) {
        Some(account) => {
            store.delete(&account);
            true
        }
        None => false,
    }
}
