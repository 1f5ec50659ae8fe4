use anyhow::{Context, Result};
use clap::Parser;
use mvn_latest::{
    DEFAULT_BASE_URL, OutputFormat, ResolverConfig, VersionOrder, VersionResolver, render,
};
use std::time::Duration;

/// mvn-latest - Apache Maven release resolver
///
/// Scan a Maven distribution index for the newest release and print the
/// download URLs of its binary archives (tar.gz first, then zip).
///
/// Examples:
///   mvn-latest                                  # Use the Apache archive
///   mvn-latest --url https://mirror/maven-3/    # Use a mirror
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Distribution index to scan (also via MVN_LATEST_URL)
    #[arg(
        long = "url",
        short = 'u',
        env = "MVN_LATEST_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// How versions are ranked; `lexical` compares plain strings
    #[arg(long, value_enum, default_value_t = VersionOrder::Lexical)]
    pub order: VersionOrder,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = ResolverConfig::new(cli.base_url)
        .with_order(cli.order)
        .with_timeout(cli.timeout.map(Duration::from_secs));

    let resolver = VersionResolver::from_config(&config)?;
    let binaries = resolver.resolve().await.with_context(|| {
        format!(
            "Failed to resolve the latest Maven release from {}",
            config.base_url()
        )
    })?;

    println!("{}", render(&binaries, cli.format)?);
    Ok(())
}
