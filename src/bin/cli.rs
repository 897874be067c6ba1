//! linedex CLI
//!
//! Command-line interface for inspecting and mutating one table file.
//! Keys are treated as strings; integer keys sort as strings here, so use the
//! library API directly when numeric ordering matters.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use linedex::{Config, Table};

/// linedex CLI
#[derive(Parser, Debug)]
#[command(name = "linedex-cli")]
#[command(about = "CLI for linedex flat-file tables")]
#[command(version)]
struct Args {
    /// Data directory holding the record files
    #[arg(short, long, default_value = "./linedex_data")]
    data_dir: String,

    /// Table name (record file is {data_dir}/{table}.txt)
    #[arg(short, long)]
    table: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert a record line under a key
    Put {
        /// The key (must equal the line's first field)
        key: String,

        /// The serialized record line, fields joined by '|'
        record: String,
    },

    /// Look up the record for a key
    Get {
        /// The key to look up
        key: String,
    },

    /// Logically delete the record for a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List all active records in file order
    List,

    /// List all active records in ascending key order
    Report,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,linedex=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder().data_dir(&args.data_dir).build();

    let mut table: Table<String> = match Table::open(&config, &args.table) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Failed to open table {}: {}", args.table, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut table, args.command) {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(table: &mut Table<String>, command: Commands) -> linedex::Result<()> {
    match command {
        Commands::Put { key, record } => {
            table.insert(&record, key)?;
            println!("OK");
        }
        Commands::Get { key } => match table.lookup(&key)? {
            Some(record) => println!("{}", record),
            None => println!("(not found)"),
        },
        Commands::Del { key } => {
            if table.delete(&key)? {
                println!("OK");
            } else {
                println!("(not found)");
            }
        }
        Commands::List => {
            for record in table.scan_all()? {
                println!("{}", record?);
            }
        }
        Commands::Report => {
            for entry in table.ordered_scan() {
                let (key, record) = entry?;
                println!("{}\t{}", key, record);
            }
        }
    }
    Ok(())
}
