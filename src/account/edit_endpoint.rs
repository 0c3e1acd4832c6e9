//! Defines the endpoint for updating an account holder's details.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    account::{
        core::{Account, AccountId},
        store::AccountStore,
    },
};

/// The state needed to edit an account.
#[derive(Debug, Clone)]
pub struct EditAccountState {
    /// The store for managing accounts.
    pub account_store: Arc<Mutex<AccountStore>>,
}

impl FromRef<AppState> for EditAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            account_store: state.account_store.clone(),
        }
    }
}

/// The account holder details that may be changed.
///
/// Omitted fields keep their current value. Any other account fields in the
/// request body are ignored.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditAccountRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A route handler for updating an account, responds with 204 No Content on
/// success or 404 if the account does not exist.
pub async fn edit_account_endpoint(
    State(state): State<EditAccountState>,
    Path(account_id): Path<AccountId>,
    Json(request): Json<EditAccountRequest>,
) -> Response {
    let mut store = match state.account_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Could not acquire account store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    match update_account(account_id, request, &mut store) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => {
            tracing::debug!("Could not update account {account_id}: {error}");
            error.into_response()
        }
    }
}

fn update_account(
    id: AccountId,
    request: EditAccountRequest,
    store: &mut AccountStore,
) -> Result<Account, Error> {
    let mut account = store.find_by_id(id).ok_or(Error::AccountNotFound(id))?;

    if let Some(first_name) = request.first_name {
        account.first_name = first_name;
    }
    if let Some(last_name) = request.last_name {
        account.last_name = last_name;
    }
    if let Some(email) = request.email {
        account.email = email;
    }

    store.save(account)
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::{Path, State},
        http::StatusCode,
    };
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    use crate::{
        Error,
        account::{
            Account,
            edit_endpoint::{EditAccountRequest, EditAccountState, update_account},
            edit_account_endpoint,
            store::AccountStore,
        },
    };

    #[track_caller]
    fn must_create_test_store() -> AccountStore {
        AccountStore::with_seed_accounts(datetime!(2025-01-01 00:00 UTC))
    }

    #[tokio::test]
    async fn can_update_account() {
        let want_account = Account {
            first_name: "Al".to_owned(),
            last_name: "Dur".to_owned(),
            email: "al@example.com".to_owned(),
            ..must_create_test_store().find_by_id(1).unwrap()
        };
        let state = EditAccountState {
            account_store: Arc::new(Mutex::new(must_create_test_store())),
        };

        let response = edit_account_endpoint(
            State(state.clone()),
            Path(1),
            Json(EditAccountRequest {
                first_name: Some("Al".to_owned()),
                last_name: Some("Dur".to_owned()),
                email: Some("al@example.com".to_owned()),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let got_account = state.account_store.lock().unwrap().find_by_id(1).unwrap();
        assert_eq!(want_account, got_account);
    }

    #[tokio::test]
    async fn update_missing_account_is_not_found() {
        let state = EditAccountState {
            account_store: Arc::new(Mutex::new(must_create_test_store())),
        };

        let response = edit_account_endpoint(
            State(state),
            Path(99),
            Json(EditAccountRequest::default()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn update_only_changes_given_fields() {
        let mut store = must_create_test_store();
        let before = store.find_by_id(1).unwrap();

        let after = update_account(
            1,
            EditAccountRequest {
                first_name: Some("Al".to_owned()),
                ..Default::default()
            },
            &mut store,
        )
        .unwrap();

        assert_eq!(
            after,
            Account {
                first_name: "Al".to_owned(),
                ..before
            }
        );
        assert_eq!(after.last_name, "Durand");
        assert_eq!(after.email, "alice.durand@example.com");
        assert_eq!(after.balance, dec!(1000.50));
    }

    #[test]
    fn update_missing_account_does_not_insert() {
        let mut store = must_create_test_store();

        let result = update_account(7, EditAccountRequest::default(), &mut store);

        assert_eq!(result, Err(Error::AccountNotFound(7)));
        assert_eq!(store.find_by_id(7), None);
    }
}
