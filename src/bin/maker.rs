//! Product Maker Binary
//!
//! Appends one product record to the data file.

use clap::Parser;
use productstore::shell::ProductForm;
use productstore::{Config, OpenMode, RecordStore, SyncStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// Product Maker
#[derive(Parser, Debug)]
#[command(name = "product-maker")]
#[command(about = "Append a fixed-length product record")]
#[command(version)]
struct Args {
    /// Data file
    #[arg(short, long, default_value = "products.dat")]
    file: String,

    /// Product ID (exactly 6 characters)
    #[arg(long)]
    id: String,

    /// Product name (up to 35 characters)
    #[arg(short, long)]
    name: String,

    /// Product description (up to 75 characters)
    #[arg(short, long)]
    description: String,

    /// Product cost
    #[arg(short, long)]
    cost: String,

    /// Defer fsync until the store is closed
    #[arg(long)]
    sync_on_close: bool,
}

fn main() {
    // Logs go to stderr; stdout carries the result
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,productstore=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let form = ProductForm::new(args.id, args.name, args.description, args.cost);
    let product = match form.validate() {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let sync_strategy = if args.sync_on_close {
        SyncStrategy::OnClose
    } else {
        SyncStrategy::EveryWrite
    };

    let config = Config::builder()
        .data_file(&args.file)
        .mode(OpenMode::ReadWrite)
        .sync_strategy(sync_strategy)
        .build();

    let mut store = match RecordStore::open_with(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open {}: {}", args.file, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = store.append(&product) {
        tracing::error!("Error writing to file: {}", e);
        std::process::exit(1);
    }

    println!(
        "Record added successfully! ({} records in {})",
        store.record_count(),
        args.file
    );

    if let Err(e) = store.close() {
        tracing::error!("Error closing file: {}", e);
        std::process::exit(1);
    }
}
