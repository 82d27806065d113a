use clap::Parser;
use kindred_core::Domain;
use kindred_store::CatalogRegistry;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Find items similar to a title in the movie, music, anime or game catalog
#[derive(Parser, Debug)]
#[command(name = "kindred")]
#[command(about = "Similarity lookup over precomputed neighbor tables", long_about = None)]
struct Args {
    /// Catalog to query (movies, music, anime, games)
    domain: Domain,

    /// Exact item title, as it appears in the catalog
    title: String,

    /// Path to the directory holding the catalog and neighbor artifacts
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Maximum number of recommendations to print
    #[arg(short, long)]
    limit: Option<usize>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Data directory: {:?}", args.data_dir);

    let registry = CatalogRegistry::new(&args.data_dir);
    let records = registry.resolve(args.domain, &args.title, args.limit)?;

    if records.is_empty() {
        println!(
            "No recommendations found for \"{}\" in {}.",
            args.title, args.domain
        );
        return Ok(());
    }

    println!("Items similar to \"{}\" in {}:", args.title, args.domain);
    for (rank, record) in records.iter().enumerate() {
        println!("\n{}.", rank + 1);
        for (field, value) in record.fields() {
            println!("  {}: {}", field, value);
        }
    }

    Ok(())
}
