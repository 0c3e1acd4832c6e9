//! Defines the endpoint for creating a new account.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    account::{
        core::{Account, NewAccount},
        store::AccountStore,
    },
    endpoints::{self, format_endpoint},
};

/// The state needed to create an account.
#[derive(Debug, Clone)]
pub struct CreateAccountState {
    /// The store for managing accounts.
    pub account_store: Arc<Mutex<AccountStore>>,
}

impl FromRef<AppState> for CreateAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            account_store: state.account_store.clone(),
        }
    }
}

/// A route handler for creating a new account, responds with 201 Created, the
/// stored account and its URI in the `Location` header.
pub async fn create_account_endpoint(
    State(state): State<CreateAccountState>,
    Json(new_account): Json<NewAccount>,
) -> Response {
    let mut store = match state.account_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Could not acquire account store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    let account = match create_account(new_account, OffsetDateTime::now_utc(), &mut store) {
        Ok(account) => account,
        Err(error) => {
            tracing::error!("Could not create account: {error}");
            return error.into_response();
        }
    };
    tracing::info!("Created account {:?}", account.id);

    let location = account
        .id
        .and_then(|id| HeaderValue::from_str(&format_endpoint(endpoints::ACCOUNT, id)).ok());
    let mut response = (StatusCode::CREATED, Json(account)).into_response();
    if let Some(location) = location {
        response.headers_mut().insert(LOCATION, location);
    }

    response
}

fn create_account(
    new_account: NewAccount,
    creation_time: OffsetDateTime,
    store: &mut AccountStore,
) -> Result<Account, Error> {
    store.save(new_account.into_account(creation_time))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::State,
        http::{HeaderValue, StatusCode, header::LOCATION},
    };
    use rust_decimal_macros::dec;
    use time::macros::{date, datetime};

    use crate::account::{
        Account, AccountId, NewAccount,
        create_endpoint::{CreateAccountState, create_account, create_account_endpoint},
        store::AccountStore,
    };

    fn test_new_account() -> NewAccount {
        NewAccount {
            first_name: "Dana".to_owned(),
            last_name: "Leroy".to_owned(),
            email: "dana.leroy@example.com".to_owned(),
            birthday: Some(date!(1999 - 09 - 09)),
            balance: dec!(42.10),
        }
    }

    #[test]
    fn create_account_assigns_next_id_and_creation_time() {
        let mut store = AccountStore::with_seed_accounts(datetime!(2025-01-01 00:00 UTC));
        let creation_time = datetime!(2025-06-01 12:00 UTC);

        let account = create_account(test_new_account(), creation_time, &mut store).unwrap();

        assert_eq!(
            account,
            Account {
                id: Some(4),
                first_name: "Dana".to_owned(),
                last_name: "Leroy".to_owned(),
                email: "dana.leroy@example.com".to_owned(),
                birthday: Some(date!(1999 - 09 - 09)),
                creation_time,
                balance: dec!(42.10),
            }
        );
        assert_eq!(store.find_by_id(4), Some(account));
    }

    #[tokio::test]
    async fn responds_with_created_account() {
        let state = CreateAccountState {
            account_store: Arc::new(Mutex::new(AccountStore::new())),
        };

        let response =
            create_account_endpoint(State(state.clone()), Json(test_new_account())).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(LOCATION),
            Some(&HeaderValue::from_static("/accounts/1"))
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let got: Account = serde_json::from_slice(&body).unwrap();
        assert_eq!(got.id, Some(1));
        assert_eq!(state.account_store.lock().unwrap().find_by_id(1), Some(got));
    }

    #[tokio::test]
    async fn exhausted_id_sequence_is_internal_error() {
        let mut store = AccountStore::new();
        store
            .save(Account {
                id: Some(AccountId::MAX),
                ..test_new_account().into_account(datetime!(2025-01-01 00:00 UTC))
            })
            .unwrap();
        let state = CreateAccountState {
            account_store: Arc::new(Mutex::new(store)),
        };

        let response =
            create_account_endpoint(State(state.clone()), Json(test_new_account())).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(state.account_store.lock().unwrap().find_all().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn parallel_creates_get_unique_ids() {
        const REQUEST_COUNT: usize = 32;
        let state = CreateAccountState {
            account_store: Arc::new(Mutex::new(AccountStore::with_seed_accounts(datetime!(
                2025-01-01 00:00 UTC
            )))),
        };

        let tasks: Vec<_> = (0..REQUEST_COUNT)
            .map(|_| {
                let state = state.clone();
                tokio::spawn(async move {
                    create_account_endpoint(State(state), Json(test_new_account()))
                        .await
                        .status()
                })
            })
            .collect();
        for task in tasks {
            assert_eq!(task.await.unwrap(), StatusCode::CREATED);
        }

        let accounts = state.account_store.lock().unwrap().find_all();
        let mut ids: Vec<_> = accounts.iter().filter_map(|account| account.id).collect();
        ids.dedup();
        assert_eq!(accounts.len(), 3 + REQUEST_COUNT);
        assert_eq!(ids, (1..=(3 + REQUEST_COUNT as AccountId)).collect::<Vec<_>>());
    }
}
