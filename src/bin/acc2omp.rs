//! Command-line interface for acc2omp
//! This binary rewrites OpenACC directives in a source file as OpenMP directives.
//!
//! Usage:
//!   acc2omp translate `<input>` [-o `<output>`] [-f `<format>`]  - Translate (or dump) a file
//!   acc2omp repl                                            - Translate lines typed interactively
//!   acc2omp list-formats                                    - List all available formats
use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use acc2omp::config::{Acc2OmpConfig, Loader};
use acc2omp::processor::{process_file, OutputFormat};
use acc2omp::translate;

/// Project-local configuration picked up from the working directory
const LOCAL_CONFIG: &str = "acc2omp.toml";

#[derive(Parser)]
#[command(name = "acc2omp")]
#[command(version, about = "Rewrite OpenACC directives as OpenMP directives")]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a source file
    Translate {
        /// Path to the source file
        input: PathBuf,
        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format (e.g., 'omp', 'token-json')
        #[arg(short, long)]
        format: Option<String>,
        /// Octal permission bits for the output file, e.g. 644
        #[arg(long)]
        permissions: Option<String>,
    },
    /// Translate lines read from stdin, one at a time
    Repl,
    /// List available output formats
    ListFormats,
}

fn main() {
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });
    init_tracing(&config.logging.level, cli.verbose);

    let result = match cli.command {
        Commands::Translate { input, output, .. } => {
            handle_translate_command(&input, output.as_deref(), &config)
        }
        Commands::Repl => handle_repl_command(),
        Commands::ListFormats => {
            handle_list_formats_command();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Acc2OmpConfig, config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    if let Commands::Translate {
        format,
        permissions,
        ..
    } = &cli.command
    {
        if let Some(format) = format {
            loader = loader.set_override("output.format", format.as_str())?;
        }
        if let Some(permissions) = permissions {
            loader = loader.set_override("output.permissions", permissions.as_str())?;
        }
    }
    loader.build()
}

fn init_tracing(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Handle the translate command
fn handle_translate_command(
    input: &Path,
    output: Option<&Path>,
    config: &Acc2OmpConfig,
) -> Result<(), Box<dyn Error>> {
    let format = OutputFormat::from_string(&config.output.format)?;
    let permissions = config.output.permission_bits()?;
    debug!(input = %input.display(), format = format.name(), "processing");

    let result = process_file(input, &format)?;

    match output {
        Some(path) => {
            fs::write(path, result)?;
            if let Some(mode) = permissions {
                apply_permissions(path, mode)?;
            }
            info!(output = %path.display(), "wrote translation");
        }
        None => print!("{}", result),
    }
    Ok(())
}

#[cfg(unix)]
fn apply_permissions(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn apply_permissions(path: &Path, mode: u32) -> io::Result<()> {
    warn!(
        output = %path.display(),
        mode = format!("{:o}", mode),
        "permission bits are only applied on unix"
    );
    Ok(())
}

/// Handle the repl command
fn handle_repl_command() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "acc2omp > ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line?;

        match translate(&format!("{}\n", line)) {
            Ok(translated) => write!(stdout, "{}", translated)?,
            Err(e) => {
                warn!(error = %e, "line rejected");
                eprintln!("Error: {}", e);
            }
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::available_formats() {
        println!("  {}", format.name());
        println!("    {}", format.description());
    }
}
