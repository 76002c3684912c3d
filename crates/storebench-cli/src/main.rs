//! Storebench command line.
//!
//! `storebench run` executes the six-operation pass against both stores,
//! prints the per-operation lines and summary table, and renders the
//! comparison charts. `storebench seed` loads deterministic fixtures into
//! both stores first.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use storebench::config::{
    DEFAULT_CHARTS_DIR, DEFAULT_MONGO_DB, DEFAULT_MONGO_URI, DEFAULT_POSTGRES_URL,
};
use storebench::{
    fixtures, report, run_pass, BenchConfig, BenchReport, MongoStore, PostgresStore, StoreOps,
};

/// Document-vs-relational store benchmark
#[derive(Parser, Debug)]
#[command(name = "storebench", version, about = "Document-vs-relational store benchmark")]
struct Args {
    /// MongoDB connection string
    #[arg(long, default_value = DEFAULT_MONGO_URI)]
    mongo_uri: String,

    /// MongoDB database name
    #[arg(long, default_value = DEFAULT_MONGO_DB)]
    mongo_db: String,

    /// PostgreSQL connection string
    #[arg(long, default_value = DEFAULT_POSTGRES_URL)]
    postgres_url: String,

    /// Region value the filtered operations match
    #[arg(long, default_value = "Asia")]
    region: String,

    /// Directory rendered charts are written into
    #[arg(long, default_value = DEFAULT_CHARTS_DIR)]
    charts_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the benchmark against both stores (the default)
    Run,
    /// Load deterministic sales-record fixtures into both stores
    Seed {
        /// Number of records to generate
        #[arg(long, default_value_t = 10_000)]
        records: usize,
    },
}

impl Args {
    fn to_config(&self) -> BenchConfig {
        BenchConfig::new()
            .with_mongo_uri(&self.mongo_uri)
            .with_mongo_db(&self.mongo_db)
            .with_postgres_url(&self.postgres_url)
            .with_region(&self.region)
            .with_charts_dir(&self.charts_dir)
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storebench=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> storebench::Result<()> {
    let config = args.to_config();
    match args.command.unwrap_or(Command::Run) {
        Command::Run => run_benchmark(&config).await,
        Command::Seed { records } => seed(&config, records).await,
    }
}

async fn run_benchmark(config: &BenchConfig) -> storebench::Result<()> {
    let mongo = MongoStore::connect(config).await?;
    let postgres = PostgresStore::connect(config).await?;
    info!(
        documents = mongo.count_primary().await?,
        rows = postgres.count_primary().await?,
        "primary datasets"
    );

    // Document pass completes before the relational pass begins; each pass
    // owns its store's scratch destination for the duration.
    let document = run_pass(&mongo).await?;
    let relational = run_pass(&postgres).await?;

    let report_data = BenchReport::paired(document, relational)?;
    report::print_summary(&report_data);
    let files = report::render_charts(&report_data, &config.charts_dir)?;
    println!(
        "\nRendered {} charts into {}",
        files.len(),
        config.charts_dir.display()
    );
    Ok(())
}

async fn seed(config: &BenchConfig, records: usize) -> storebench::Result<()> {
    let batch = fixtures::generate_records(records);
    info!(records = batch.len(), "generated fixtures");

    let mongo = MongoStore::connect(config).await?;
    let inserted = mongo.seed(&batch).await?;
    info!(store = mongo.label(), inserted, "primary dataset seeded");

    let postgres = PostgresStore::connect(config).await?;
    postgres.ensure_schema().await?;
    let inserted = postgres.seed(&batch).await?;
    info!(store = postgres.label(), inserted, "primary dataset seeded");

    Ok(())
}
