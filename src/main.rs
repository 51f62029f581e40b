use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use tokenizer::{
    display_error,
    lexer::{
        lexer::{next_token, tokenize, Cursor},
        recognizers::{default_registry, registry_with_block_comments},
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = " <>h</> 11_ . r22 _dr 33  #434334567876543\n  #ffg\"fff //df    9\n 8";

#[derive(Parser)]
#[command(name = "tokenizer", about = "Scan text into classified tokens", version)]
struct Cli {
    /// Text to scan; a built-in sample is used when neither this nor --file is given
    #[arg(value_name = "INPUT", conflicts_with = "file")]
    input: Option<String>,

    /// Read the text to scan from a file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Recognize `/* */` comments as well as `//` ones
    #[arg(long)]
    block_comments: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (source, name) = match (&cli.input, &cli.file) {
        (Some(input), _) => (input.clone(), String::from("<input>")),
        (None, Some(path)) => match read_to_string(path) {
            Ok(contents) => (contents, path.to_string_lossy().into_owned()),
            Err(error) => {
                eprintln!("Error: failed to read {}: {}", path.display(), error);
                process::exit(1);
            }
        },
        (None, None) => (String::from(SAMPLE), String::from("<sample>")),
    };

    let registry = if cli.block_comments {
        registry_with_block_comments()
    } else {
        default_registry()
    };

    let start = Instant::now();
    let mut cursor = Cursor::new(&source);
    let mut count = 0;

    while let Some(token) = tokenize(&mut cursor, &registry) {
        println!("\n{}\n________________", token);
        count += 1;
    }

    info!(tokens = count, elapsed = ?start.elapsed(), "tokenized");

    if cursor.has_more() {
        if let Err(error) = next_token(&mut cursor, &registry) {
            display_error(&error, &source, &name);
            process::exit(1);
        }
    }
}
