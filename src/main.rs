use clap::Parser;
use tracing_subscriber::EnvFilter;

use cluster_version::VersionResolver;

#[derive(Parser)]
#[command(name = "cluster-version")]
#[command(version, about = "Resolve the major version of a search cluster")]
struct Cli {
    /// Endpoint URL of the cluster; credentials may be embedded
    url: String,

    /// Index whose settings are probed when the root endpoint has no version
    #[arg(long)]
    index: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let major = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            VersionResolver::new()
                .resolve_major_version(&cli.url, cli.index.as_deref())
                .await
        })?;

    println!("{major}");

    Ok(())
}
