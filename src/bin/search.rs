//! Product Search Binary
//!
//! Searches the data file by partial product name, or lists every record.

use clap::{Parser, Subcommand};
use productstore::shell::{self, parse_query};
use productstore::{Config, ExportFormat, RecordStore, SearchHit, TrailingDataPolicy};
use tracing_subscriber::{fmt, EnvFilter};

/// Product Search
#[derive(Parser, Debug)]
#[command(name = "product-search")]
#[command(about = "Search fixed-length product records by name")]
#[command(version)]
struct Args {
    /// Data file
    #[arg(short, long, default_value = "products.dat")]
    file: String,

    /// Output format: text, csv, json or xml
    #[arg(long, default_value = "text")]
    format: ExportFormat,

    /// Skip a trailing partial record instead of failing
    #[arg(long)]
    ignore_trailing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find products whose name contains a term (case-insensitive)
    Find {
        /// Partial product name
        term: String,
    },

    /// List every record
    List,

    /// Print the record count
    Count,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,productstore=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> productstore::Result<()> {
    let policy = if args.ignore_trailing {
        TrailingDataPolicy::Ignore
    } else {
        TrailingDataPolicy::Reject
    };

    let config = Config::builder()
        .data_file(&args.file)
        .read_only()
        .trailing_data(policy)
        .build();

    let mut store = RecordStore::open_with(config)?;

    let hits: Vec<SearchHit> = match &args.command {
        Commands::Find { term } => {
            let query = parse_query(term)?;
            store.search(&query)?
        }
        Commands::List => store
            .scan_all()?
            .into_iter()
            .enumerate()
            .map(|(index, product)| SearchHit {
                index: index as u64,
                product,
            })
            .collect(),
        Commands::Count => {
            println!("{}", store.record_count());
            return store.close();
        }
    };

    println!("{}", shell::render(&hits, args.format)?);

    store.close()
}
