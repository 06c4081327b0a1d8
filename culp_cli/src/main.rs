//! # Culp Calculator CLI
//!
//! Terminal front end for the feet-inch-fraction calculator. Lines of key
//! words (`12ft 6in 3/8 + 4ft =`) are fed through a calculator session and
//! the readout is printed after each line.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;

use culp_core::calculator::{Calculator, Readout};
use culp_core::keys::parse_keys;
use culp_core::{load_settings, round_to_nearest_fraction, save_settings, CalcError, CalcResult, Settings};

#[derive(Parser)]
#[command(name = "culp_cli")]
#[command(about = "Culp Calculator CLI - feet, inches and fractions", long_about = None)]
struct Cli {
    /// Settings file (JSON); defaults apply when omitted
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one key sequence through a fresh calculator
    Eval {
        /// Key words, e.g. `12ft 6in + 3/8 =`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        keys: Vec<String>,
        /// Print the readout as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive session, one key sequence per line
    Repl,
    /// Round inches to the nearest fraction
    Round {
        #[arg(allow_hyphen_values = true)]
        inches: f64,
        /// Fraction denominator
        #[arg(long, default_value_t = culp_core::fraction::DEFAULT_DENOMINATOR)]
        denom: u32,
    },
    /// Manage the settings file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a settings file with default values
    Init {
        /// Where to write the settings file
        path: PathBuf,
    },
    /// Print the effective settings as JSON
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Eval { keys, json } => cmd_eval(cli.settings.as_deref(), &keys.join(" "), json),
        Commands::Repl => cmd_repl(cli.settings.as_deref()),
        Commands::Round { inches, denom } => {
            cmd_round(inches, denom);
            Ok(())
        }
        Commands::Config(ConfigCommands::Init { path }) => cmd_config_init(&path),
        Commands::Config(ConfigCommands::Show) => cmd_config_show(cli.settings.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn settings_from(path: Option<&Path>) -> CalcResult<Settings> {
    match path {
        Some(path) => load_settings(path),
        None => Ok(Settings::default()),
    }
}

fn cmd_eval(settings_path: Option<&Path>, line: &str, json: bool) -> CalcResult<()> {
    let settings = settings_from(settings_path)?;
    let mut calc = Calculator::new(&settings);
    calc.press_all(parse_keys(line)?)?;

    let readout = calc.readout();
    if json {
        println!("{}", serde_json::to_string_pretty(&readout)?);
    } else {
        print_readout(&readout);
    }
    Ok(())
}

fn cmd_repl(settings_path: Option<&Path>) -> CalcResult<()> {
    let settings = settings_from(settings_path)?;
    let mut calc = Calculator::new(&settings);

    println!("Culp Calculator");
    println!("===============");
    println!("Type key words (e.g. `12ft 6in 3/8 + 4ft =`), `help` or `quit`.");
    println!();
    print_readout(&calc.readout());

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match lines.read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match input.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            line => {
                if let Err(e) = parse_keys(line).and_then(|keys| calc.press_all(keys)) {
                    eprintln!("Error: {}", e);
                }
            }
        }
        print_readout(&calc.readout());
    }
    Ok(())
}

fn cmd_round(inches: f64, denom: u32) {
    let r = round_to_nearest_fraction(inches, denom);
    println!("{}", r);
}

fn cmd_config_init(path: &Path) -> CalcResult<()> {
    if path.exists() {
        return Err(CalcError::file_error(
            "create",
            path.display().to_string(),
            "file already exists",
        ));
    }
    save_settings(&Settings::default(), path)?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

fn cmd_config_show(settings_path: Option<&Path>) -> CalcResult<()> {
    let settings = settings_from(settings_path)?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

fn print_readout(readout: &Readout) {
    println!("  total: {:>20}  {}", readout.total, readout.pending.as_deref().unwrap_or(""));
    println!("  entry: {:>20}", readout.entry);
}

fn print_help() {
    println!("  12ft 12' 2yd 1mi      digits on the feet pad (with unit)");
    println!("  6in 6\" 30cm 2m 5mm    digits on the inch pad (with unit)");
    println!("  1/8 1/4 3/8 ... 7/16  fraction rail");
    println!("  2.5                   plain number");
    println!("  + - x / xd /d         operators (xd, /d are dimension-aware)");
    println!("  = c ac                equals, clear entry, all clear");
    println!("  <ft <in <num          backspace");
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
