use anyhow::{Context, Result};
use clap::Parser;
use filemanifest_core::build_category_index;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// 根据各应用的 metadata.json 生成分类索引
#[derive(Parser, Debug)]
#[command(name = "repo-index", version, about = "生成应用仓库分类索引（JSON）")]
struct Cli {
    /// 仓库目录（每个应用一个子目录）
    repository: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let index = build_category_index(&cli.repository)
        .with_context(|| format!("build category index for {}", cli.repository.display()))?;
    let json = index.to_json_string().context("encode index")?;

    let mut out = io::stdout().lock();
    writeln!(out, "{json}").context("write index")?;
    out.flush().context("flush stdout")?;

    info!(categories = index.categories.len(), "index finished");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
