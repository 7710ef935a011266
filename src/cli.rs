//! CLI 模块

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tick")]
#[command(version)]
#[command(about = "A minimal to-do list TUI")]
pub struct Cli {
    /// Tasks file path (overrides tasks_file in ~/.tick/config.toml)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
