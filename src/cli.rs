// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "fps-camera")]
#[command(about = "First-person camera viewer", long_about = None)]
pub struct Cli {
    /// JSON file with camera settings; defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log the camera pose every N frames (0 disables)
    #[arg(long = "log-every", default_value_t = 60)]
    pub log_every: u64,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
