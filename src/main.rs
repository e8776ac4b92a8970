use anyhow::{Context, Result};
use clap::Parser;

use quill::cli::handlers::{self, CommandContext};
use quill::cli::{Cli, Commands};
use quill::config::QuillConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    let _log_guard = quill::logging::init(cli.verbose, log_file.as_deref());

    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { host, port } => handlers::handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handlers::handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(ctx, mutation, variables),
        Commands::Schema => handlers::handle_schema(ctx),
    }
}

fn load_config(cli: &Cli) -> Result<QuillConfig> {
    if let Some(path) = &cli.config {
        return QuillConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let cwd = std::env::current_dir()?;
    let (config, _) = QuillConfig::load(&cwd).context("Failed to load .quill.yml")?;
    Ok(config)
}
