//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use time::OffsetDateTime;

use crate::account::AccountStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store holding every account, shared by all route handlers.
    pub account_store: Arc<Mutex<AccountStore>>,
}

impl AppState {
    /// Create a new [AppState] that serves the accounts in `account_store`.
    pub fn new(account_store: AccountStore) -> Self {
        Self {
            account_store: Arc::new(Mutex::new(account_store)),
        }
    }
}

impl Default for AppState {
    /// An [AppState] with the demonstration accounts opened now.
    fn default() -> Self {
        Self::new(AccountStore::with_seed_accounts(OffsetDateTime::now_utc()))
    }
}
