//! # Seed Data Generator
//!
//! Populates the sales ledger with demo sales for reporting-UI development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 sales (default)
//! cargo run -p forno-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p forno-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p forno-db --bin seed -- --db ./data/forno.db
//! ```
//!
//! ## Generated Sales
//! Each sale gets:
//! - A rotating demo customer (name, address, phone)
//! - 1-3 pizza lines with varied sizes and ingredients
//! - A commit timestamp spread across the last ~60 days, so both the
//!   day and the month report views have data

use chrono::{Duration, Utc};
use std::env;

use forno_core::catalog::Catalog;
use forno_core::pricing::price_order;
use forno_core::types::{CustomerInfo, StagedLine};
use forno_db::{Database, DbConfig};

/// Demo customers (name, address, phone).
const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Ana Torres", "12 Oak Street", "555-0101"),
    ("Luis Mendoza", "48 Elm Avenue", "555-0102"),
    ("Carla Reyes", "7 Maple Lane", "555-0103"),
    ("Diego Flores", "230 Pine Road", "555-0104"),
    ("Marta Silva", "91 Cedar Court", "555-0105"),
    ("Pablo Ortiz", "15 Birch Way", "555-0106"),
];

/// Catalog sizes, cycled by the generator.
const SIZES: &[&str] = &["small", "medium", "large"];

/// Ingredient pool for demo lines.
const INGREDIENTS: &[&str] = &[
    "mozzarella",
    "pepperoni",
    "mushrooms",
    "olives",
    "ham",
    "pineapple",
    "onion",
    "basil",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = "./forno_dev.db".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(count);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Forno POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of sales to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./forno_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Forno POS Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!("Sales:    {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.sales().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} sales", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating sales...");

    let catalog = Catalog::standard();
    let now = Utc::now();
    let start = std::time::Instant::now();

    for seed in 0..count {
        let (name, address, phone) = CUSTOMERS[seed % CUSTOMERS.len()];
        let customer = CustomerInfo::new(name, address, phone);

        let lines = generate_lines(seed);
        let order = price_order(&catalog, &lines)?;

        // Spread commits across the last ~60 days at varied hours
        let days_ago = (seed * 13) % 60;
        let hour_offset = 10 + (seed * 7) % 12;
        let created_at =
            now - Duration::days(days_ago as i64) - Duration::hours(hour_offset as i64);

        db.sales()
            .insert_order_at(&customer, &order, created_at)
            .await?;

        if (seed + 1) % 25 == 0 {
            println!("  Generated {} sales...", seed + 1);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} sales in {:?}", count, elapsed);

    let total = db.sales().count().await?;
    println!("  Ledger now holds {} sales", total);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates 1-3 staged lines for one demo sale, deterministically from
/// the seed index (no rand dependency needed for demo data).
fn generate_lines(seed: usize) -> Vec<StagedLine> {
    let line_count = 1 + (seed * 3) % 3;

    (0..line_count)
        .map(|n| {
            let size = SIZES[(seed + n) % SIZES.len()];
            let quantity = 1 + ((seed + n) * 5) % 3;

            let ingredient_count = (seed + n * 2) % 4;
            let ingredients = (0..ingredient_count)
                .map(|k| INGREDIENTS[(seed + n + k * 3) % INGREDIENTS.len()].to_string())
                .collect();

            StagedLine::new(size, quantity as i64, ingredients)
        })
        .collect()
}
