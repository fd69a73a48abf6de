use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use numbers_cli::commands::{config_ops, convert_ops, lookup_ops};

#[derive(Parser)]
#[command(name = "numtool", about = "Steno number dictionary tool")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON trace logs to this directory (requires --features trace)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate number outlines
    Lookup {
        /// Outlines with strokes separated by '/', e.g. 12/3KR
        #[arg(required = true)]
        outlines: Vec<String>,
        /// Print one JSON object per outline
        #[arg(long)]
        json: bool,
    },
    /// Spell out a number in English words
    Words {
        /// Decimal digits
        digits: String,
    },
    /// Write a number as a roman numeral
    Roman {
        /// Value between 1 and 3999
        value: u64,
        /// Use lower-case numerals
        #[arg(long)]
        lower: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    steno_numbers::trace_init::init_tracing(cli.log_dir.as_deref());

    if let Some(file) = &cli.settings {
        if let Err(e) = config_ops::load_settings(file) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Lookup { outlines, json } => lookup_ops::lookup_cmd(&outlines, json),
        Command::Words { digits } => convert_ops::words_cmd(&digits),
        Command::Roman { value, lower } => convert_ops::roman_cmd(value, lower),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
