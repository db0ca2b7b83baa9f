use roleta_analyzer::{Analyzer, AnalyzerConfig};
use roleta_runner::{OutputFormat, Session};
use std::io::{self, Cursor};

fn print_help() {
    eprintln!(
        r#"Roleta - wheel trend analyzer

USAGE:
    roleta [OPTIONS] [INPUT]...

OPTIONS:
    --config <PATH>     Load analyzer thresholds from a JSON file
    --json              Print each analysis as a JSON line
    --help              Print this help message

INPUT:
    Draws (0-36) and commands, processed in order. When none are given,
    they are read from stdin, one per line.

COMMANDS:
    <number>            Record a draw and print the analysis
    reset | clear       Discard the history and start a fresh session
    history             Print the current history
    quit | exit         Stop

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Interactive
    roleta

    # One-shot
    roleta 7 15 17

    # Custom thresholds, JSON output
    roleta --config roleta.json --json < draws.txt
"#
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut format = OutputFormat::Text;
    let mut inputs: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--json" => format = OutputFormat::Json,
            arg if arg.starts_with("--") => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
            arg => inputs.push(arg.to_string()),
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            AnalyzerConfig::from_file(&path)?
        }
        None => AnalyzerConfig::default(),
    };

    let analyzer = Analyzer::new(config)?;
    log::info!("Session {} started", analyzer.id());
    let mut session = Session::new(analyzer, format);

    let stdout = io::stdout();
    if inputs.is_empty() {
        let stdin = io::stdin();
        session.run(stdin.lock(), stdout.lock())?;
    } else {
        session.run(Cursor::new(inputs.join("\n")), stdout.lock())?;
    }

    Ok(())
}
