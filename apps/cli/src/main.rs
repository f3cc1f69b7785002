mod commands;

use clap::{Parser, Subcommand};
use commands::{EncodeFlags, Input};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ncr")]
#[command(about = "Convert text to and from numeric character references", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Encode {
        text: Option<String>,

        #[arg(long, short)]
        input: Option<PathBuf>,

        #[arg(long)]
        hex: bool,

        #[arg(long)]
        named: bool,

        #[arg(long)]
        markup: bool,

        #[arg(long, short)]
        config: Option<PathBuf>,
    },
    Decode {
        text: Option<String>,

        #[arg(long, short)]
        input: Option<PathBuf>,

        #[arg(long)]
        strict: bool,

        #[arg(long, short)]
        config: Option<PathBuf>,
    },
    Lookup {
        query: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            text,
            input,
            hex,
            named,
            markup,
            config,
        } => commands::encode_text(
            &Input { text, file: input },
            &EncodeFlags {
                hexadecimal: hex,
                named,
                markup,
            },
            config.as_deref(),
        ),
        Commands::Decode {
            text,
            input,
            strict,
            config,
        } => commands::decode_text(&Input { text, file: input }, strict, config.as_deref()),
        Commands::Lookup { query } => commands::lookup_entity(&query),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
