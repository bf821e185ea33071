mod version;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::version::{current, short_version};

/// ビルド時に埋め込まれたメタデータを表示する。
#[derive(Parser)]
#[command(version = short_version())]
struct Args {
    /// JSON 形式で出力する
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!(version = short_version(), "zest version");

    let info = current();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{info}");
    }

    Ok(())
}
