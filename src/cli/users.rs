use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::users::{generate_users, write_users_file, UserGenOptions, DEFAULT_OUTPUT};

#[derive(Debug, Clone, Default)]
pub struct GenerateUsersCommandConfig {
    pub out_path: Option<PathBuf>,
    pub managers: Option<usize>,
    pub staff: Option<usize>,
    pub warehouse_ids: Vec<String>,
    pub seed: Option<u64>,
}

/// Returns the path written, for callers that want to echo it.
pub fn run_generate_users(cfg: GenerateUsersCommandConfig) -> Result<PathBuf> {
    let out_path = cfg.out_path.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let users = generate_users(&UserGenOptions {
        managers: cfg.managers,
        staff: cfg.staff,
        warehouse_ids: cfg.warehouse_ids,
        seed: cfg.seed,
    });
    write_users_file(&out_path, &users)?;
    info!(path = %out_path.display(), count = users.len(), "fake users written");
    println!(
        "Generated {} fake users and saved to {}!",
        users.len(),
        out_path.display()
    );
    Ok(out_path)
}
