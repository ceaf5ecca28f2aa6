//! CLI tool for the card number input pipeline.
//!
//! # Usage
//!
//! ```bash
//! # Format a card number
//! cardfield format 4111111111111111
//!
//! # Detect the card type from a (partial) number
//! cardfield detect 3714
//!
//! # Check the Luhn checksum
//! cardfield luhn 4532015112830366
//!
//! # Run the whole pipeline, optionally with a caret
//! cardfield check "4111 11111" --cursor 10 --output json
//!
//! # Replay an edit script (file or stdin)
//! cardfield replay edits.txt
//! echo "type 4111\ntype 1" | cardfield replay -
//! ```
//!
//! Set `RUST_LOG=card_field=debug` to see per-edit log events.

use std::io::Read;
use std::path::{Path, PathBuf};

use card_field::script::{parse_script, EditCommand};
use card_field::{
    detect_card_type, extract_digits, format, is_luhn_valid, process, process_with_cursor,
    EditSession, FieldState, Validity,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardfield")]
#[command(author, version, about = "Card number input normalization and validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a card number for display
    Format {
        /// Card number (any separators or noise allowed)
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Detect the card type from a number or prefix
    Detect {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Check if a card passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Run the full pipeline on one field value
    Check {
        /// Raw field value
        raw: String,

        /// Caret offset within the raw value (chars)
        #[arg(short, long)]
        cursor: Option<usize>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Replay an edit script and print the field after every edit
    Replay {
        /// Script file, or `-` for stdin
        script: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,

        /// Show the full number instead of masking it
        #[arg(long)]
        reveal: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct ReplayLine<'a> {
    step: usize,
    command: String,
    #[serde(flatten)]
    state: &'a FieldState,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "card_field=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            card_number,
            separator,
        } => {
            cmd_format(&card_number, &separator);
        }
        Commands::Detect { card_number } => {
            cmd_detect(&card_number);
        }
        Commands::Luhn { card_number } => {
            cmd_luhn(&card_number);
        }
        Commands::Check {
            raw,
            cursor,
            output,
        } => {
            cmd_check(&raw, cursor, output);
        }
        Commands::Replay {
            script,
            output,
            reveal,
        } => {
            cmd_replay(&script, output, reveal);
        }
    }
}

fn cmd_format(card_number: &str, separator: &str) {
    println!("{}", format::format_with_separator(card_number, separator));
}

fn cmd_detect(card_number: &str) {
    let digits = extract_digits(card_number);
    if digits.is_empty() {
        eprintln!("Error: No digits provided");
        std::process::exit(1);
    }
    let card_type = detect_card_type(&digits);
    println!("Detected Card Type: {}", card_type);
    if !card_type.is_known() {
        std::process::exit(1);
    }
}

fn cmd_luhn(card_number: &str) {
    let digits = extract_digits(card_number);
    if !digits.is_empty() && is_luhn_valid(&digits) {
        println!("Luhn check: PASS");
        std::process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        std::process::exit(1);
    }
}

fn cmd_check(raw: &str, cursor: Option<usize>, output: OutputFormat) {
    let state = match cursor {
        Some(offset) => process_with_cursor(raw, offset),
        None => process(raw),
    };

    match output {
        OutputFormat::Text => {
            println!("Formatted: {}", state.formatted());
            println!("Card Type: {}", state.card_type());
            println!("Validity: {}", state.validity());
            println!("Cursor: {}", state.cursor());
        }
        OutputFormat::Json => print_json(&state),
    }

    let code = if state.validity() == Validity::Valid { 0 } else { 1 };
    std::process::exit(code);
}

fn cmd_replay(path: &Path, output: OutputFormat, reveal: bool) {
    let text = match read_script(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let commands = match parse_script(&text) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut session = EditSession::new();
    for (step, command) in commands.iter().enumerate() {
        session = command.apply(&session);
        match output {
            OutputFormat::Text => print_step(step + 1, command, session.state(), reveal),
            OutputFormat::Json if reveal => print_json(&ReplayLine {
                step: step + 1,
                command: command.to_string(),
                state: session.state(),
            }),
            OutputFormat::Json => print_json(&serde_json::json!({
                "step": step + 1,
                "command": command.to_string(),
                "formatted": session.state().masked(),
                "card_type": session.card_type(),
                "validity": session.validity(),
                "cursor": session.cursor(),
            })),
        }
    }
}

fn read_script(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

fn print_step(step: usize, command: &EditCommand, state: &FieldState, reveal: bool) {
    let shown = if reveal {
        state.formatted().to_string()
    } else {
        state.masked()
    };

    // Draw the caret inside the text
    let mut with_caret: String = shown.chars().take(state.cursor()).collect();
    with_caret.push('|');
    with_caret.extend(shown.chars().skip(state.cursor()));

    println!(
        "{:>3}  {:<24} [{}]  {} / {}",
        step,
        command.to_string(),
        with_caret,
        state.card_type(),
        state.validity()
    );
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
