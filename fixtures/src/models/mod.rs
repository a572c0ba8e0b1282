use super::schema::{accounts, transactions, users};
use serde::{Deserialize, Serialize};

#[derive(Queryable, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize)]
#[table_name = "users"]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Queryable, Insertable, Serialize, Deserialize)]
#[table_name = "accounts"]
pub struct Account {
    pub account_number: i32,
    pub user_id: i32,
    pub balance: bigdecimal::BigDecimal,
    pub created_at: chrono::NaiveDateTime,
}

/// An account waiting for its owner's database id.
/// `owner_index` points into the generated user list; the real `user_id`
/// is only known once the users have been inserted.
#[derive(Clone)]
pub struct AccountSeed {
    pub account_number: i32,
    pub owner_index: usize,
    pub balance: bigdecimal::BigDecimal,
}

impl AccountSeed {
    pub fn to_account(&self, user_id: i32) -> Account {
        Account {
            account_number: self.account_number,
            user_id,
            balance: self.balance.clone(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[derive(Queryable, Insertable, Serialize, Deserialize)]
#[table_name = "transactions"]
pub struct Transaction {
    pub account_number: i32,
    pub from_account_number: i32,
    pub to_account_number: i32,
    pub amount: bigdecimal::BigDecimal,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
