#[macro_use]
extern crate diesel;
extern crate bigdecimal;
extern crate chrono;

pub mod generator;
pub mod models;
pub mod schema;

use crate::models::{Account, Transaction};
use std::fmt;

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account Number:    {}\n\
             Owner Id:          {}\n\
             Balance:           {}",
            self.account_number, self.user_id, self.balance
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Source Account:    {}\n\
             Dest Account:      {}\n\
             Amount:            {}",
            self.from_account_number, self.to_account_number, self.amount
        )
    }
}
