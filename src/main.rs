use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use punchlist::core::config;
use punchlist::core::item::SectionKind;
use punchlist::core::store::ItemStore;
use punchlist::tui;

#[derive(Parser)]
#[command(name = "punchlist", about = "Sectioned checklist with a diffing render core")]
struct Args {
    /// Checklist file to load (TOML). Defaults to the built-in checklist.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Show only one section on startup
    #[arg(short, long, value_enum)]
    focus: Option<SectionKind>,

    /// Never write edits back to the data file
    #[arg(long)]
    read_only: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to punchlist.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("punchlist.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Punchlist starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("punchlist: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.data, args.focus, args.read_only);

    let store = match &resolved.data_file {
        Some(path) => match ItemStore::load(path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("punchlist: {e}");
                std::process::exit(1);
            }
        },
        None => ItemStore::seeded(),
    };

    tui::run(resolved, store)
}
