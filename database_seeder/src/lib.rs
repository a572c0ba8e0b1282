extern crate dotenv;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenv::dotenv;
use std::env;

use fixtures::generator::FixtureSet;
use fixtures::models::{AccountSeed, NewUser, Transaction, User};
use fixtures::schema;
use log::{info, trace};

pub struct DbConnection {
    connection: PgConnection,
}

impl DbConnection {
    pub fn new_connection() -> DbConnection {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let connection = PgConnection::establish(&database_url)
            .expect(&format!("Failed connecting to DB {}", database_url));
        DbConnection { connection }
    }

    /// Inserts the whole fixture set inside a single transaction, in
    /// dependency order: users, then accounts, then transactions.
    /// Any insert failure rolls the whole batch back.
    pub fn seed_fixtures(&self, fixtures: &FixtureSet) -> QueryResult<()> {
        self.connection
            .transaction::<_, diesel::result::Error, _>(|| {
                let user_ids = self.insert_users(&fixtures.users)?;
                self.insert_accounts(&fixtures.accounts, &user_ids)?;
                self.insert_transactions(&fixtures.transactions)?;
                Ok(())
            })
    }

    /// Users get their ids from the database, so each insert reads the
    /// generated id back for the account inserts that follow.
    fn insert_users(&self, users: &[NewUser]) -> QueryResult<Vec<i32>> {
        let mut user_ids = Vec::with_capacity(users.len());
        for details in users {
            let row: User = diesel::insert_into(schema::users::table)
                .values(details)
                .get_result(&self.connection)?;
            trace!("Inserted user {} with id {}", row.email, row.id);
            user_ids.push(row.id);
        }
        info!("Inserted {} users", user_ids.len());
        Ok(user_ids)
    }

    fn insert_accounts(&self, accounts: &[AccountSeed], user_ids: &[i32]) -> QueryResult<()> {
        for seed in accounts {
            let details = seed.to_account(user_ids[seed.owner_index]);
            trace!("{}", details);
            DbConnection::check_query_processed(
                diesel::insert_into(schema::accounts::table)
                    .values(&details)
                    .execute(&self.connection),
            )?;
        }
        info!("Inserted {} accounts", accounts.len());
        Ok(())
    }

    fn insert_transactions(&self, transactions: &[Transaction]) -> QueryResult<()> {
        for details in transactions {
            trace!("{}", details);
            DbConnection::check_query_processed(
                diesel::insert_into(schema::transactions::table)
                    .values(details)
                    .execute(&self.connection),
            )?;
        }
        info!("Inserted {} transactions", transactions.len());
        Ok(())
    }

    fn check_query_processed(query: QueryResult<usize>) -> QueryResult<()> {
        match query {
            Ok(0) => Err(diesel::result::Error::NotFound),
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
