use anyhow::{Context, Result};
use clap::Parser;
use filemanifest_core::{build_manifest, write_manifest, ManifestOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）：仅接受一个位置参数
#[derive(Parser, Debug)]
#[command(name = "filemanifest", version, about = "扫描目录并输出 JSON 文件清单")]
struct Cli {
    /// 要扫描的根目录
    root: PathBuf,
}

fn main() -> Result<()> {
    // 初始化日志（RUST_LOG 控制等级；日志写到 stderr，stdout 只输出 JSON）
    init_tracing();
    let cli = Cli::parse();

    info!(root = ?cli.root, "starting manifest");
    let opts = ManifestOptions::default();
    let (records, stats) = build_manifest(&cli.root, &opts)
        .with_context(|| format!("build manifest for {}", cli.root.display()))?;

    // 全部记录已在内存中，失败时不会写出半截数组
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_manifest(&records, &mut out).context("write manifest")?;
    out.flush().context("flush stdout")?;

    info!(
        files = stats.files_recorded,
        bytes = stats.bytes_total,
        empty = stats.empty_files,
        "manifest finished"
    );
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
