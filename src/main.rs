use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tool_locator::config::{self, LocatorConfig};
use tool_locator::locator::probes::ProvisioningHook;
use tool_locator::locator::resolver::Resolver;
use tool_locator::revision::Revision;
use tool_locator::system::paths::EnvSearchPaths;
use tool_locator::system::probe::CommandProbe;
use tool_locator::system::repository::DirectoryRepository;

#[derive(Parser)]
#[command(name = "tool-locator")]
#[command(version, about = "Locates an installation of an external build tool")]
struct Cli {
    /// Executable name of the tool to locate
    #[arg(long)]
    tool: Option<String>,

    /// Requested tool version
    #[arg(long = "tool-version")]
    tool_version: Option<String>,

    /// Explicit install directory that bypasses repository and PATH search
    #[arg(long)]
    override_dir: Option<PathBuf>,

    /// Root of the managed package repository
    #[arg(long)]
    repository_dir: Option<PathBuf>,

    /// Configuration file (defaults to the XDG config location)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// The CLI does not download anything; it only reports that provisioning
/// would be needed. Embedders supply their own hook.
struct ReportingHook;

impl ProvisioningHook for ReportingHook {
    fn provision(&self, revision: &Revision) {
        tracing::info!("tool revision {revision} would need to be provisioned");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let config = if config_path.is_file() {
        LocatorConfig::load(&config_path)?
    } else {
        LocatorConfig::default()
    };

    let tool = cli
        .tool
        .or(config.tool)
        .context("no tool name given; pass --tool or set it in the configuration file")?;
    let version = cli.tool_version.or(config.version);
    let override_dir = cli.override_dir.or(config.override_dir);
    let repository_dir = cli.repository_dir.or(config.repository_dir);

    // A missing repository root simply lists no packages.
    let repository = DirectoryRepository::new(repository_dir.unwrap_or_default(), &tool);
    let probe = CommandProbe::new(&tool);
    let search_paths = EnvSearchPaths::from_env();
    let hook = ReportingHook;

    let resolver = Resolver::new(&repository, &probe, &search_paths)
        .with_provisioning(&hook)
        .provision_on_failure(config.provisioning.on_failure);

    let resolution = resolver.resolve(version.as_deref(), override_dir.as_deref());
    let install_dir = resolution.outcome?;
    println!("{}", install_dir.display());
    Ok(())
}
