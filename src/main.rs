use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use lexan::{
    display_error,
    lexer::lexer::Lexer,
    output::output::{render, OutputFormat},
};
use log::{error, info, LevelFilter};

#[derive(Parser)]
#[command(
    name = "lexan",
    about = "Lexical analyzer for a small C-like language",
    after_help = "Examples:\n  lexan \"int x = 10 + 5;\"\n  lexan program.txt\n  lexan --verbose \"int x = 10;\"",
    version
)]
struct Cli {
    /// Source code to analyze, or a file containing it
    input: String,

    /// Keep whitespace and comment tokens
    #[arg(short, long)]
    verbose: bool,

    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// How tokens are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Simple)]
    format: OutputFormat,

    /// Log level (overrides RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LevelFilter>,
}

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level {
        logger.filter_level(level);
    }
    logger.init();

    let (source, origin) = match load_source(&cli.input) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", cli.input, e);
            process::exit(1);
        }
    };

    println!("Code: {:?}", source);
    println!("{}", "-".repeat(50));

    let mut lexer = Lexer::new(source.as_str());
    let tokens = match lexer.tokenize(!cli.verbose, !cli.verbose) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprint!("{}", display_error(&e, &source, &origin));
            eprintln!("Lexical analysis error: {}", e);
            process::exit(1);
        }
    };

    let report = match render(&tokens, cli.format) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: failed to render tokens: {}", e);
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => match fs::write(path, &report) {
            Ok(()) => println!("Result saved to: {}", path.display()),
            Err(e) => {
                error!("failed to write {}: {}", path.display(), e);
                eprintln!("Error: cannot write '{}': {}", path.display(), e);
                println!("{}", report);
            }
        },
        None => println!("{}", report),
    }
}

/// An input naming an existing file is read from disk; anything else is the
/// source itself. Returns the source and a name for it in diagnostics.
fn load_source(input: &str) -> std::io::Result<(String, String)> {
    let path = Path::new(input);

    if path.is_file() {
        let source = fs::read_to_string(path)?;
        info!("analyzing file {}", path.display());
        println!("Analyzing file: {}", path.display());
        Ok((source, path.display().to_string()))
    } else {
        println!("Analyzing provided code:");
        Ok((input.to_string(), String::from("<input>")))
    }
}
