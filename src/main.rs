use bouncebox::core::config::{self, CliOverrides, MAX_BOX_COUNT};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "bouncebox",
    version,
    about = "A row of toggleable boxes with a bouncing marker",
    after_help = "Keys: 0-9 toggle a box, c clears, Up/Down change speed, Enter/q/Esc quit"
)]
struct Args {
    /// Number of boxes in the row
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=MAX_BOX_COUNT as i64))]
    boxes: Option<u16>,

    /// Initial refresh interval in milliseconds (minimum 10)
    #[arg(short, long)]
    refresh_ms: Option<u64>,

    /// Config file (default: ~/.bouncebox/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a debug log to this file
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

// The terminal belongs to the animation, so logs only ever go to a file
fn init_logger(path: &Path) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
        }
        Err(e) => eprintln!("bouncebox: cannot open log file {}: {}", path.display(), e),
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logger(path);
    }

    let loaded = config::load_or_default(args.config.as_deref());
    // Printed before the alternate screen is entered, so it stays visible
    for problem in &loaded.problems {
        eprintln!("bouncebox: {problem}");
        log::warn!("Config problem: {}", problem);
    }

    let cli = CliOverrides {
        box_count: args.boxes.map(usize::from),
        refresh_ms: args.refresh_ms,
    };
    let resolved = config::resolve(&loaded.config, &cli);
    log::info!("bouncebox starting up with {:?}", resolved);

    bouncebox::tui::run(&resolved)
}
