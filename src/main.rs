//! GeSHi helper CLI
//!
//! Usage:
//!   geshi [OPTIONS] [FILE]...
//!
//! Options:
//!   -l, --language <LANG>            Language (guessed from the file extension otherwise)
//!   -c, --config <FILE>              Helper configuration (TOML format)
//!   -p, --path <DIR>                 Directory holding language definitions
//!   -n, --line-numbers <MODE>        none, normal or fancy
//!       --fancy-interval <N>         Highlight every nth line in fancy mode [default: 5]
//!       --start <N>                  Number of the first line
//!       --header <HTML>              Header content
//!       --footer <HTML>              Footer content
//!       --classes                    Emit CSS classes instead of inline styles
//!   -s, --stylesheet <FILE>          Highlight styles (TOML format)
//!       --css                        Print the class-mode stylesheet and exit
//!   -v, --verbose...                 Log more (repeat for trace output)
//!   -h, --help                       Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use geshi_helper::language::from_extension;
use geshi_helper::{GeshiHelper, Highlight, HelperConfig, LineNumbers, Stylesheet};

/// Template every input is cloned from
const CLI_TEMPLATE: &str = "cli";

#[derive(Clone, Copy, ValueEnum)]
enum LineNumberMode {
    None,
    Normal,
    Fancy,
}

#[derive(Parser)]
#[command(name = "geshi")]
#[command(about = "Syntax highlight source files to HTML")]
struct Cli {
    /// Input files (reads from stdin if none are given)
    inputs: Vec<PathBuf>,

    /// Language to highlight as
    #[arg(short, long)]
    language: Option<String>,

    /// Helper configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding language definition files
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Line numbering
    #[arg(short = 'n', long, value_enum, default_value_t = LineNumberMode::None)]
    line_numbers: LineNumberMode,

    /// Highlight every nth line when numbering is fancy
    #[arg(long, default_value_t = 5)]
    fancy_interval: usize,

    /// Number of the first line
    #[arg(long)]
    start: Option<usize>,

    /// Header HTML ({LANGUAGE} and {VERSION} are substituted)
    #[arg(long)]
    header: Option<String>,

    /// Footer HTML ({LANGUAGE} and {VERSION} are substituted)
    #[arg(long)]
    footer: Option<String>,

    /// Emit CSS classes instead of inline styles
    #[arg(long)]
    classes: bool,

    /// Highlight styles file (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Print the class-mode stylesheet and exit
    #[arg(long)]
    css: bool,

    /// Log more (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => match HelperConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => HelperConfig::default(),
    };
    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    if let Some(path) = &cli.path {
        config.path = path.clone();
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => Some(s),
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut helper = GeshiHelper::from_config(&config);
    let template = helper.template(CLI_TEMPLATE, None);
    match cli.line_numbers {
        LineNumberMode::None => {}
        LineNumberMode::Normal => template.enable_line_numbers(LineNumbers::Normal),
        LineNumberMode::Fancy => {
            template.enable_line_numbers(LineNumbers::Fancy(cli.fancy_interval))
        }
    }
    if let Some(start) = cli.start {
        template.start_line_numbers_at(start);
    }
    if let Some(header) = &cli.header {
        template.set_header_content(header);
    }
    if let Some(footer) = &cli.footer {
        template.set_footer_content(footer);
    }
    if cli.classes {
        template.enable_classes(true);
    }
    if let Some(stylesheet) = stylesheet {
        template.set_stylesheet(stylesheet);
    }

    if cli.css {
        print!("{}", template.get_stylesheet());
        return;
    }

    if cli.inputs.is_empty() {
        let mut source = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading from stdin: {}", e);
            std::process::exit(1);
        }
        println!("{}", helper.make_from(CLI_TEMPLATE, &source, None).parse_code());
        return;
    }

    for path in &cli.inputs {
        let source = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };

        let mut job = helper.make_from(CLI_TEMPLATE, &source, None);
        if cli.language.is_none() {
            let guessed = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(from_extension);
            if let Some(language) = guessed {
                debug!(file = %path.display(), language, "language guessed from extension");
                job.set_language(language);
            }
        }
        if let Some(error) = job.error() {
            eprintln!("Warning: {}: {}", path.display(), error);
        }
        println!("{}", job.parse_code());
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
