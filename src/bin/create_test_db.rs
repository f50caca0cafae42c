use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use budget_planner::{
    BudgetRepository, NewBudgetEntry, SQLiteBudgetRepository,
    budget::{NeedsBreakdown, SavingsBreakdown, WantsBreakdown},
    initialize_db,
};

/// A utility for creating a test database for the budget planner.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The number of weekly budget entries to create.
    #[arg(long, short, default_value_t = 8)]
    weeks: u32,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating {} budget entries...", args.weeks);

    let repository = SQLiteBudgetRepository::new(Arc::new(Mutex::new(conn)));
    let today = OffsetDateTime::now_utc().date();

    for week in 0..args.weeks {
        let budget_date = today - Duration::weeks(i64::from(week));
        // Alternate between lean and comfortable weeks so every mode shows up.
        let income = match week % 3 {
            0 => 450.0,
            1 => 800.0,
            _ => 1_400.0,
        };

        let mut entry = NewBudgetEntry::new(budget_date, 1_000.0 + 50.0 * week as f64, income)
            .notes(Some(&format!("Sample week {}", week + 1)));
        entry.needs = NeedsBreakdown {
            food: 120.0,
            rent: 300.0,
            utilities: 40.0,
            transportation: 35.0,
            ..Default::default()
        };
        entry.wants = WantsBreakdown {
            dining_out: 30.0,
            entertainment: 15.0,
            ..Default::default()
        };
        entry.savings = SavingsBreakdown {
            emergency: 50.0,
            goals: income / 20.0,
            ..Default::default()
        };

        repository.save(entry)?;
    }

    println!("Success!");

    Ok(())
}
