//! An in-memory store for accounts keyed by their id.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, macros::date};

use crate::{
    Error,
    account::core::{Account, AccountId},
};

/// The first id handed out by an empty store.
const FIRST_ID: AccountId = 1;

/// Holds the accounts and assigns their ids.
///
/// The store itself is not synchronized; share it behind a mutex, see
/// [AppState](crate::AppState).
#[derive(Debug, Clone, PartialEq)]
pub struct AccountStore {
    accounts: BTreeMap<AccountId, Account>,
    /// `None` once an account holds the largest possible id.
    next_id: Option<AccountId>,
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_id: Some(FIRST_ID),
        }
    }

    /// Create a store holding the three demonstration accounts, all opened at
    /// `creation_time`. They are assigned the ids 1, 2 and 3.
    pub fn with_seed_accounts(creation_time: OffsetDateTime) -> Self {
        let mut store = Self::new();

        for (id, (first_name, last_name, birthday, balance)) in (FIRST_ID..).zip([
            ("Alice", "Durand", date!(1985 - 05 - 20), Decimal::new(100050, 2)),
            ("Bob", "Martin", date!(1990 - 07 - 15), Decimal::new(25000, 2)),
            ("Charlie", "Dupont", date!(1975 - 12 - 03), Decimal::new(300000, 2)),
        ]) {
            store.insert(
                id,
                seed_account(first_name, last_name, birthday, balance, creation_time),
            );
        }

        store
    }

    /// Get every account in ascending id order.
    pub fn find_all(&self) -> Vec<Account> {
        self.accounts.values().cloned().collect()
    }

    /// Get the account with `id`, or `None` if there is no such account.
    pub fn find_by_id(&self, id: AccountId) -> Option<Account> {
        self.accounts.get(&id).cloned()
    }

    /// Insert or overwrite an account and return the stored copy.
    ///
    /// An account without an id is given the next id in the sequence. Ids are
    /// never reused, even after the account holding one is deleted.
    ///
    /// # Errors
    /// Returns [Error::IdSequenceExhausted] if the account has no id and an
    /// account already holds [AccountId::MAX].
    pub fn save(&mut self, account: Account) -> Result<Account, Error> {
        let id = match account.id {
            Some(id) => id,
            None => self.next_id.ok_or(Error::IdSequenceExhausted)?,
        };

        Ok(self.insert(id, account))
    }

    fn insert(&mut self, id: AccountId, mut account: Account) -> Account {
        if self.next_id.is_some_and(|next_id| id >= next_id) {
            self.next_id = id.checked_add(1);
        }

        account.id = Some(id);
        self.accounts.insert(id, account.clone());
        tracing::debug!("Saved account {id}");

        account
    }

    /// Remove `account` from the store.
    ///
    /// Does nothing if the account has no id or is not in the store.
    pub fn delete(&mut self, account: &Account) {
        let Some(id) = account.id else {
            return;
        };

        if self.accounts.remove(&id).is_some() {
            tracing::debug!("Deleted account {id}");
        }
    }

    /// Remove every account and restart the id sequence from 1.
    pub fn clear(&mut self) {
        self.accounts.clear();
        self.next_id = Some(FIRST_ID);
        tracing::debug!("Cleared the account store");
    }
}

fn seed_account(
    first_name: &str,
    last_name: &str,
    birthday: Date,
    balance: Decimal,
    creation_time: OffsetDateTime,
) -> Account {
    Account {
        id: None,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        birthday: Some(birthday),
        creation_time,
        balance,
    }
}
