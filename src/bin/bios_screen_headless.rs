//! BIOS Screen Headless Runner
//!
//! Replays a captured serial stream into a screen session and prints what
//! the session sees: the page model, the screen text or the colored grid.

use std::io::{self, Read};
use std::process::ExitCode;

use bios_screen::{PageOptions, Profile, ProfileConfig, Terminal};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut profile = Profile::default();
    let mut config_file: Option<String> = None;
    let mut input_file: Option<String> = None;
    let mut output_format = OutputFormat::Page;
    let mut options = PageOptions::all();
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--profile" => {
                i += 1;
                if i < args.len() {
                    profile = Profile::from_name_or_default(&args[i]);
                }
            },
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            },
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(args[i].clone());
                }
            },
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            },
            "--colors" => {
                output_format = OutputFormat::Colors;
            },
            "-s" | "--selectable" => {
                options.selectable_only = true;
            },
            "--concatenated" => {
                options = options.concatenated();
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match &config_file {
        Some(path) => {
            let json = match std::fs::read_to_string(path) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("Error reading profile '{}': {}", path, e);
                    return ExitCode::FAILURE;
                },
            };
            match ProfileConfig::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error loading profile '{}': {}", path, e);
                    return ExitCode::FAILURE;
                },
            }
        },
        None => ProfileConfig::builtin(profile),
    };

    // Read input
    let input_data = match &input_file {
        Some(path) => match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path, e);
                return ExitCode::FAILURE;
            },
        },
        None => {
            let mut data = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut data) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            data
        },
    };

    let mut terminal = Terminal::with_config(config);
    terminal.feed(&input_data);

    // Output result
    let json = match output_format {
        OutputFormat::Text => {
            println!("Screen ({}x{}):", terminal.cols(), terminal.rows());
            println!("---");
            for line in terminal.whole_page() {
                println!("{}", line);
            }
            println!("---");
            return ExitCode::SUCCESS;
        },
        OutputFormat::Page => serde_json::to_string_pretty(&terminal.page(options)),
        OutputFormat::Colors => match terminal.colored_snapshot() {
            Ok(snapshot) => serde_json::to_string_pretty(&snapshot),
            Err(e) => {
                eprintln!("Colored snapshot unavailable: {}", e);
                return ExitCode::SUCCESS;
            },
        },
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            return ExitCode::FAILURE;
        },
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Page,
    Text,
    Colors,
}

fn print_help() {
    println!("BIOS Screen Headless Runner");
    println!();
    println!("Usage: bios-screen-headless [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -p, --profile <NAME>  Built-in profile: client (default) or server");
    println!("  -c, --config <PATH>   Load a JSON profile instead of a built-in one");
    println!("  -f, --file <PATH>     Read the serial capture from a file");
    println!("  -s, --selectable      Only list entries that can take the focus");
    println!("      --concatenated    Join keys and values into one field");
    println!("  -t, --text            Print the screen text");
    println!("      --colors          Print the colored cell grid as JSON");
    println!("  -h, --help            Show this help message");
    println!();
    println!("Without --text or --colors the page model is printed as JSON.");
    println!("Set RUST_LOG to see parser diagnostics on stderr.");
}
