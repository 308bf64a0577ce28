//! Demo data loader for local development.
//!
//! Fills an empty catalog database with a small set of office supplies so the
//! API has something to serve.
//!
//! ## Usage
//! ```text
//! cargo run -p catalog-db --bin seed -- --db ./catalog.db
//! ```

use std::env;

use catalog_core::{Money, Product};
use catalog_db::{Database, DbConfig, ProductStore};

/// (name, description, price) triples loaded into a fresh database.
const DEMO_PRODUCTS: &[(&str, &str, &str)] = &[
    ("Pen", "Blue ballpoint pen, medium tip", "1.50"),
    ("Pencil", "HB graphite pencil", "0.75"),
    ("Notebook", "A5 dotted notebook, 96 pages", "4.50"),
    ("Stapler", "Half-strip desk stapler", "12.99"),
    ("Staples", "Box of 1000, 26/6", "2.25"),
    ("Eraser", "Latex-free white eraser", "0.60"),
    ("Ruler", "30cm aluminium ruler", "3.10"),
    ("Marker", "Permanent marker, black", "2.50"),
    ("Sticky Notes", "76x76mm, yellow, 100 sheets", "1.99"),
    ("Tape", "Clear adhesive tape, 19mm x 33m", "1.75"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./catalog.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Catalog Demo Data Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./catalog.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Catalog Demo Data Loader");
    println!("========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected, schema ready");

    // Refuse to double-seed
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Loading products...");

    let repo = db.products();
    for (name, description, price) in DEMO_PRODUCTS {
        let price: Money = price.parse()?;
        let stored = repo.add(&Product::new(*name, *description, price)).await?;
        println!("  #{} {} @ {}", stored.id, stored.name, stored.price);
    }

    println!();
    println!("✓ Loaded {} demo products", DEMO_PRODUCTS.len());

    Ok(())
}
