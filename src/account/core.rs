//! The account model and its JSON representation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// The integer type used to identify accounts.
pub type AccountId = i64;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A bank account held by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The id for the account.
    ///
    /// This is `None` until the account has been saved to an
    /// [AccountStore](crate::account::AccountStore), which assigns it once.
    #[serde(default)]
    pub id: Option<AccountId>,
    /// The account holder's first name.
    #[serde(default)]
    pub first_name: String,
    /// The account holder's last name.
    #[serde(default)]
    pub last_name: String,
    /// The account holder's email address.
    #[serde(default)]
    pub email: String,
    /// The account holder's date of birth.
    #[serde(default, with = "iso_date::option")]
    pub birthday: Option<Date>,
    /// When the account was opened.
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time: OffsetDateTime,
    /// The amount of money in the account.
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub balance: Decimal,
}

/// The request body for creating an account.
///
/// Every field is optional. Fields the server controls, the id and creation
/// time, are not part of the request and are ignored if a client sends them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// The account holder's first name.
    #[serde(default)]
    pub first_name: String,
    /// The account holder's last name.
    #[serde(default)]
    pub last_name: String,
    /// The account holder's email address.
    #[serde(default)]
    pub email: String,
    /// The account holder's date of birth.
    #[serde(default, with = "iso_date::option")]
    pub birthday: Option<Date>,
    /// The opening balance, zero if omitted.
    ///
    /// JSON numbers are read digit for digit, they never pass through a float.
    #[serde(
        default,
        deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize"
    )]
    pub balance: Decimal,
}

impl NewAccount {
    /// Create an unsaved [Account] opened at `creation_time`.
    pub fn into_account(self, creation_time: OffsetDateTime) -> Account {
        Account {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            birthday: self.birthday,
            creation_time,
            balance: self.balance,
        }
    }
}
