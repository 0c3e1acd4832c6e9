//! Defines the endpoints for listing accounts and getting a single account.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    account::{core::AccountId, store::AccountStore},
};

/// The state needed to read accounts.
#[derive(Debug, Clone)]
pub struct GetAccountsState {
    /// The store holding the accounts.
    pub account_store: Arc<Mutex<AccountStore>>,
}

impl FromRef<AppState> for GetAccountsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            account_store: state.account_store.clone(),
        }
    }
}

/// A route handler that responds with every account as a JSON list.
pub async fn get_accounts_endpoint(State(state): State<GetAccountsState>) -> Response {
    let store = match state.account_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Could not acquire account store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    Json(store.find_all()).into_response()
}

/// A route handler that responds with the account `account_id` as JSON, or
/// 404 if there is no such account.
pub async fn get_account_endpoint(
    State(state): State<GetAccountsState>,
    Path(account_id): Path<AccountId>,
) -> Response {
    let store = match state.account_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Could not acquire account store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    match store.find_by_id(account_id) {
        Some(account) => Json(account).into_response(),
        None => Error::AccountNotFound(account_id).into_response(),
    }
}
