use simplelog::{
    CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};
use std::fs;
use std::fs::File;

use database_seeder::DbConnection;
use fixtures::generator::FixtureSet;
use log::{error, info};

fn init_logging() {
    let mut config = ConfigBuilder::new();
    config.set_location_level(LevelFilter::Error);
    config.set_thread_level(LevelFilter::Error);
    config.set_time_level(LevelFilter::Error);
    fs::create_dir_all("Logs").unwrap();
    CombinedLogger::init(vec![
        TermLogger::new(LevelFilter::Info, config.build(), TerminalMode::Stdout),
        WriteLogger::new(
            LevelFilter::Error,
            config.build(),
            File::create("Logs/seeder.log").unwrap(),
        ),
    ])
    .unwrap();
}

fn main() {
    init_logging();
    let fixtures = FixtureSet::generate();
    info!(
        "Generated {} users, {} accounts and {} transactions",
        fixtures.users.len(),
        fixtures.accounts.len(),
        fixtures.transactions.len()
    );
    let connection = DbConnection::new_connection();
    match connection.seed_fixtures(&fixtures) {
        Ok(()) => println!("Data insertion completed successfully."),
        Err(e) => {
            error!("Seeding failed, transaction rolled back");
            println!("Error: {}", e);
        }
    }
}
