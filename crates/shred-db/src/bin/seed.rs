//! # Seed Reference Data
//!
//! Populates the catalog's lookup tables for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./shred_dev.db (default)
//! cargo run -p shred-db --bin seed
//!
//! # Specify database path
//! cargo run -p shred-db --bin seed -- --db ./data/shred.db
//! ```
//!
//! ## Seeded Tables
//! - Categories (strength, cardio, stretching, ...)
//! - Muscles, grouped by body region
//! - Apparatus (barbell, dumbbell, bench, ...)
//! - Licenses (CC0, CC-BY-4.0, CC-BY-SA-4.0)
//!
//! Rows whose code already exists are skipped, so the seeder can be re-run
//! against a database that is already in use.

use std::env;

use shred_core::{ApparatusRequest, CategoryRequest, LicenseRequest, MuscleRequest};
use shred_db::{CatalogEntity, Database, DbConfig, DbResult, Repository};

/// (code, name, description)
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("STRENGTH", "Strength", "Resistance training for force production"),
    ("HYPERTROPHY", "Hypertrophy", "Moderate loads, higher volume, muscle growth"),
    ("CARDIO", "Cardio", "Sustained aerobic conditioning"),
    ("HIIT", "HIIT", "High intensity interval training"),
    ("PLYOMETRICS", "Plyometrics", "Jumps and explosive movements"),
    ("STRETCHING", "Stretching", "Static and dynamic flexibility work"),
    ("MOBILITY", "Mobility", "Joint range of motion and control"),
];

/// (code, name, description, group)
const MUSCLES: &[(&str, &str, &str, &str)] = &[
    ("PEC", "Pectoralis major", "Large chest muscle", "Chest"),
    ("LAT", "Latissimus dorsi", "Broad muscle of the mid and lower back", "Back"),
    ("TRAP", "Trapezius", "Upper back and neck", "Back"),
    ("ERECTOR", "Erector spinae", "Muscles along the spine", "Back"),
    ("DELT", "Deltoid", "Shoulder cap", "Shoulders"),
    ("BICEP", "Biceps brachii", "Front of the upper arm", "Arms"),
    ("TRICEP", "Triceps brachii", "Back of the upper arm", "Arms"),
    ("QUAD", "Quadriceps", "Front of the thigh", "Legs"),
    ("HAMSTRING", "Hamstrings", "Back of the thigh", "Legs"),
    ("GLUTE", "Gluteus maximus", "Hip extensor", "Legs"),
    ("CALF", "Gastrocnemius", "Calf muscle", "Legs"),
    ("ABS", "Rectus abdominis", "Front of the trunk", "Core"),
    ("OBLIQUE", "Obliques", "Sides of the trunk", "Core"),
];

/// (code, name, description)
const APPARATUS: &[(&str, &str, &str)] = &[
    ("BARBELL", "Barbell", "Olympic bar"),
    ("DUMBBELL", "Dumbbell", ""),
    ("KETTLEBELL", "Kettlebell", ""),
    ("BENCH", "Bench", "Flat or adjustable bench"),
    ("PULLUP-BAR", "Pull-up bar", ""),
    ("CABLE", "Cable machine", ""),
    ("BAND", "Resistance band", ""),
    ("BODYWEIGHT", "Bodyweight", "No equipment"),
];

/// (short name, full name, url)
const LICENSES: &[(&str, &str, &str)] = &[
    (
        "CC0",
        "Creative Commons Public Domain 1.0",
        "https://creativecommons.org/publicdomain/zero/1.0/",
    ),
    (
        "CC-BY-4.0",
        "Creative Commons Attribution 4.0 International",
        "https://creativecommons.org/licenses/by/4.0/",
    ),
    (
        "CC-BY-SA-4.0",
        "Creative Commons Attribution-ShareAlike 4.0 International",
        "https://creativecommons.org/licenses/by-sa/4.0/",
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./shred_dev.db");

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
                println!("Shred Seed Data");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./shred_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Shred Seed Data");
    println!("==================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");
    println!();

    let categories = CATEGORIES
        .iter()
        .map(|(code, name, description)| CategoryRequest::new(*code, *name, *description))
        .collect();
    seed_table("categories", &db.categories(), categories).await?;

    let muscles = MUSCLES
        .iter()
        .map(|(code, name, description, group)| {
            MuscleRequest::new(*code, *name, *description, *group)
        })
        .collect();
    seed_table("muscles", &db.muscles(), muscles).await?;

    let apparatus = APPARATUS
        .iter()
        .map(|(code, name, description)| ApparatusRequest::new(*code, *name, *description))
        .collect();
    seed_table("apparatus", &db.apparatus(), apparatus).await?;

    let licenses = LICENSES
        .iter()
        .map(|(short_name, full_name, url)| LicenseRequest::new(*short_name, *full_name, *url))
        .collect();
    seed_table("licenses", &db.licenses(), licenses).await?;

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Inserts each request, skipping keys that are already present.
async fn seed_table<E: CatalogEntity>(
    label: &str,
    repo: &Repository<E>,
    requests: Vec<E::Request>,
) -> DbResult<()> {
    let mut inserted = 0;
    let mut skipped = 0;

    for request in &requests {
        match repo.create(request).await {
            Ok(_) => inserted += 1,
            Err(e) if e.is_unique_violation() => skipped += 1,
            Err(e) => return Err(e),
        }
    }

    println!(
        "✓ {:<11} {} inserted, {} already present, {} total",
        label,
        inserted,
        skipped,
        repo.count().await?
    );

    Ok(())
}
