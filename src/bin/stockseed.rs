use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use stockmaster_seed::api::client::ApiClient;
use stockmaster_seed::cli::seed::{run_all, run_categories, run_products, run_warehouses};
use stockmaster_seed::cli::users::{run_generate_users, GenerateUsersCommandConfig};
use stockmaster_seed::config::{SeedConfig, BASE_URL_ENV, TOKEN_ENV};
use stockmaster_seed::logging::init_tracing;
use stockmaster_seed::seed::{SeedOptions, SeedSummary};
use stockmaster_seed::util::env;

#[derive(Parser, Debug)]
#[command(name = "stockseed", version, about = "StockMaster reference-data seeder")]
struct Cli {
    /// Override API_BASE_URL (default http://localhost:5000/api)
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Read existing records and report what would be created, without writing
    #[arg(long, global = true, default_value_t = false)]
    dry_run: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Commands {
    /// Ensure the baseline product categories exist
    Categories,
    /// Ensure the baseline products exist (categories must already be seeded)
    Products,
    /// Ensure the baseline warehouses and their locations exist
    Warehouses,
    /// Seed categories, warehouses and products in dependency order
    All,
    /// Write a JSON file of synthetic users for manual import (offline)
    GenerateUsers {
        /// Output file (default: fake_users.json)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Number of managers (default: random 4-5)
        #[arg(long)]
        managers: Option<usize>,
        /// Number of warehouse staff (default: random 10-15)
        #[arg(long)]
        staff: Option<usize>,
        /// Warehouse ids to assign (comma-separated); random placeholders when omitted
        #[arg(long, value_delimiter = ',')]
        warehouse_ids: Vec<String>,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Resolves config (token first, before any request) and builds the client.
fn connect(base_url: Option<&str>) -> Result<ApiClient> {
    let config = SeedConfig::from_env(base_url)?;
    env::preflight_check("stockseed", &[TOKEN_ENV], &[BASE_URL_ENV, TOKEN_ENV])?;
    info!(base_url = %config.base_url, "seeding");
    ApiClient::new(config)
}

fn print_summaries(summaries: &[SeedSummary]) {
    for summary in summaries {
        println!("{summary}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env::init_env();
    init_tracing("warn,stockmaster_seed=info,stockseed=info")?;
    env::bootstrap_cli("stockseed");
    let cli = Cli::parse();
    let base_url = cli.base_url.as_deref();
    let opts = SeedOptions {
        dry_run: cli.dry_run || env::env_flag("SEED_DRY_RUN", false),
    };

    let summaries = match cli.command {
        Commands::Categories => vec![run_categories(&connect(base_url)?, opts).await?],
        Commands::Products => vec![run_products(&connect(base_url)?, opts).await?],
        Commands::Warehouses => vec![run_warehouses(&connect(base_url)?, opts).await?],
        Commands::All => run_all(&connect(base_url)?, opts).await?,
        Commands::GenerateUsers {
            out,
            managers,
            staff,
            warehouse_ids,
            seed,
        } => {
            run_generate_users(GenerateUsersCommandConfig {
                out_path: out,
                managers,
                staff,
                warehouse_ids,
                seed,
            })?;
            return Ok(());
        }
    };
    print_summaries(&summaries);
    Ok(())
}
