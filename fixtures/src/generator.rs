use crate::models::{AccountSeed, NewUser, Transaction};
use bigdecimal::{BigDecimal, FromPrimitive};
use chrono::Utc;
use fake::faker::internet::en::FreeEmail;
use fake::Fake;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use std::iter;

// Seed profile
pub const ADMIN_USER_COUNT: usize = 2;
pub const NORMAL_USER_COUNT: usize = 8;
pub const TRANSACTION_COUNT: usize = 20;
pub const PASSWORD_LENGTH: usize = 8;
pub const MIN_BALANCE: f64 = 1000.0;
pub const MAX_BALANCE: f64 = 10000.0;
pub const MIN_AMOUNT: f64 = 10.0;
pub const MAX_AMOUNT: f64 = 1000.0;

const FIRST_NAMES: [&str; 20] = [
    "Hossam", "Ahmed", "Youssef", "Omar", "Ali", "Mahmoud", "Amr", "Khaled", "Mostafa", "Mohamed",
    "Sara", "Mona", "Yasmin", "Fatma", "Noor", "Layla", "Nadine", "Hana", "Reem", "Amina",
];

const LAST_NAMES: [&str; 10] = [
    "Hassan", "Mohamed", "Ali", "Ibrahim", "Sayed", "Mahmoud", "Mostafa", "Hussein", "Salem",
    "Fathy",
];

/// Everything one seeding run inserts, generated up front in memory.
pub struct FixtureSet {
    pub users: Vec<NewUser>,
    pub accounts: Vec<AccountSeed>,
    pub transactions: Vec<Transaction>,
}

impl FixtureSet {
    /// Generates the full batch: admin users first, then normal users each
    /// with one account, then transfers between the generated accounts.
    pub fn generate() -> FixtureSet {
        let mut users = Vec::with_capacity(ADMIN_USER_COUNT + NORMAL_USER_COUNT);
        let mut accounts = Vec::with_capacity(NORMAL_USER_COUNT);
        for _ in 0..ADMIN_USER_COUNT {
            users.push(NewUser::generate("admin"));
        }
        for _ in 0..NORMAL_USER_COUNT {
            users.push(NewUser::generate("user"));
            accounts.push(AccountSeed::generate(users.len() - 1));
        }
        let transactions = (0..TRANSACTION_COUNT)
            .map(|_| Transaction::generate(&accounts))
            .collect();
        FixtureSet {
            users,
            accounts,
            transactions,
        }
    }
}

impl NewUser {
    pub fn generate(role: &str) -> NewUser {
        let mut rng = rand::thread_rng();
        let now = Utc::now().naive_utc();
        NewUser {
            first_name: FIRST_NAMES.choose(&mut rng).unwrap().to_string(),
            last_name: LAST_NAMES.choose(&mut rng).unwrap().to_string(),
            email: FreeEmail().fake(),
            password: generate_password(),
            role: role.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl AccountSeed {
    pub fn generate(owner_index: usize) -> AccountSeed {
        AccountSeed {
            account_number: generate_account_number(),
            owner_index,
            balance: random_amount(MIN_BALANCE, MAX_BALANCE),
        }
    }
}

impl Transaction {
    pub fn generate(accounts: &[AccountSeed]) -> Transaction {
        let mut rng = rand::thread_rng();
        let source = accounts.choose(&mut rng).unwrap();
        let mut dest = accounts.choose(&mut rng).unwrap();
        // resample until the transfer has two distinct endpoints
        while dest.account_number == source.account_number {
            dest = accounts.choose(&mut rng).unwrap();
        }
        let now = Utc::now().naive_utc();
        Transaction {
            account_number: source.account_number,
            from_account_number: source.account_number,
            to_account_number: dest.account_number,
            amount: random_amount(MIN_AMOUNT, MAX_AMOUNT),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Random alphanumeric password, resampled until it holds at least one
/// digit, one lowercase and one uppercase letter.
pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    loop {
        let password: String = iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .take(PASSWORD_LENGTH)
            .collect();
        if password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
        {
            return password;
        }
    }
}

/// Random 6 digit account number. Uniqueness is not enforced.
pub fn generate_account_number() -> i32 {
    rand::thread_rng().gen_range(100000, 1000000)
}

fn random_amount(low: f64, high: f64) -> BigDecimal {
    let value = rand::thread_rng().gen_range(low, high);
    BigDecimal::from_f64((value * 100.0).round() / 100.0)
        .unwrap()
        .with_scale(2)
}

#[cfg(test)]
mod generator_test {
    use super::*;

    #[test]
    fn password_contains_required_character_classes() {
        for _ in 0..100 {
            let password = generate_password();
            assert_eq!(password.len(), PASSWORD_LENGTH);
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn account_numbers_have_six_digits() {
        for _ in 0..100 {
            let number = generate_account_number();
            assert!(number >= 100000 && number <= 999999);
        }
    }

    #[test]
    fn fixture_counts_match_the_seed_profile() {
        let fixtures = FixtureSet::generate();
        assert_eq!(
            fixtures.users.len(),
            ADMIN_USER_COUNT + NORMAL_USER_COUNT
        );
        assert_eq!(fixtures.accounts.len(), NORMAL_USER_COUNT);
        assert_eq!(fixtures.transactions.len(), TRANSACTION_COUNT);
        assert!(fixtures.users[..ADMIN_USER_COUNT]
            .iter()
            .all(|user| user.role == "admin"));
        assert!(fixtures.users[ADMIN_USER_COUNT..]
            .iter()
            .all(|user| user.role == "user"));
    }

    #[test]
    fn accounts_belong_to_normal_users() {
        let fixtures = FixtureSet::generate();
        for seed in &fixtures.accounts {
            assert_eq!(fixtures.users[seed.owner_index].role, "user");
        }
    }

    #[test]
    fn balances_and_amounts_stay_in_range() {
        let fixtures = FixtureSet::generate();
        let min_balance = BigDecimal::from_f64(MIN_BALANCE).unwrap();
        let max_balance = BigDecimal::from_f64(MAX_BALANCE).unwrap();
        let min_amount = BigDecimal::from_f64(MIN_AMOUNT).unwrap();
        let max_amount = BigDecimal::from_f64(MAX_AMOUNT).unwrap();
        for seed in &fixtures.accounts {
            assert!(seed.balance >= min_balance && seed.balance <= max_balance);
        }
        for transaction in &fixtures.transactions {
            assert!(transaction.amount >= min_amount && transaction.amount <= max_amount);
        }
    }

    #[test]
    fn transactions_connect_two_distinct_generated_accounts() {
        let fixtures = FixtureSet::generate();
        for transaction in &fixtures.transactions {
            assert_ne!(
                transaction.from_account_number,
                transaction.to_account_number
            );
            assert_eq!(transaction.account_number, transaction.from_account_number);
            assert!(fixtures
                .accounts
                .iter()
                .any(|seed| seed.account_number == transaction.from_account_number));
            assert!(fixtures
                .accounts
                .iter()
                .any(|seed| seed.account_number == transaction.to_account_number));
        }
    }
}
