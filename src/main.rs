//! Wordlist Forge - fixed-length wordlist generation
//!
//! Generates every combination of a given length over an alphabet (digits by
//! default) and writes them to a file, one per line.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, InquireError};
use tracing_subscriber::EnvFilter;

use wordlist_forge::{
    format::{format_count, format_file_size},
    types::DEFAULT_PROGRESS_INTERVAL,
    wordlist::DEFAULT_DIGITS,
    CancelToken, GenerationConfig, Result, RunStatus, WordlistWriter, WriteSummary,
};

#[derive(Parser, Debug)]
#[command(name = "wordlist-forge", version)]
#[command(about = "Generate fixed-length wordlists (digits 0-9 by default)")]
struct Cli {
    /// Output filename
    #[arg(short, long, default_value = "wordlist.txt", env = "WORDLIST_OUTPUT")]
    output: PathBuf,

    /// Length of every combination
    #[arg(short, long, default_value_t = 8, env = "WORDLIST_LENGTH")]
    length: usize,

    /// Symbols to use, in enumeration order
    #[arg(long, visible_alias = "digits", default_value = DEFAULT_DIGITS, env = "WORDLIST_ALPHABET")]
    alphabet: String,

    /// Generate only N combinations
    #[arg(short, long, env = "WORDLIST_SAMPLE")]
    sample: Option<u128>,

    /// Start from this combination index (resume a previous run)
    #[arg(long, default_value_t = 0, env = "WORDLIST_START")]
    start: u128,

    /// Report progress every N combinations
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL, env = "WORDLIST_PROGRESS_INTERVAL")]
    progress_interval: u64,

    /// Skip the confirmation prompt for large runs
    #[arg(short = 'y', long)]
    yes: bool,

    /// Do not show a progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Initialize the library
    if let Err(e) = wordlist_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!();
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main wordlist workflow
fn run(cli: Cli) -> Result<()> {
    let config = GenerationConfig {
        alphabet: cli.alphabet.parse()?,
        length: cli.length,
        output: cli.output,
        start: cli.start,
        sample: cli.sample,
        progress_interval: cli.progress_interval,
        ..Default::default()
    };
    config.validate()?;

    let chatty = !cli.json;
    if chatty {
        print_banner(&config)?;
    }

    if config.needs_confirmation()? && !cli.yes && !confirm_large_run(&config)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let writer = WordlistWriter::new(config)?;
    install_interrupt_handler(writer.cancel_token());

    let bar = if cli.quiet || cli.json {
        None
    } else {
        Some(progress_bar(writer.config().window_size()?))
    };

    if chatty {
        println!("🚀 Generating wordlist...");
    }

    let summary = writer.run(|progress| {
        if let Some(bar) = &bar {
            bar.set_position(clamp_u64(progress.current));
        }
    })?;

    if let Some(bar) = &bar {
        bar.set_position(clamp_u64(summary.written));
        match summary.status {
            RunStatus::Completed => bar.finish(),
            RunStatus::Interrupted => bar.abandon(),
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        display_summary(&summary);
    }

    Ok(())
}

/// Show what is about to be generated
fn print_banner(config: &GenerationConfig) -> Result<()> {
    println!("🔢 Wordlist Forge - fixed-length wordlist generation");
    println!("═══════════════════════════════════════════════════");
    println!("   Alphabet: {}", config.alphabet);
    println!("   Length: {}", config.length);
    println!(
        "   Total combinations: {}",
        format_count(config.total_combinations()?)
    );
    if config.start > 0 {
        println!("   Starting at index: {}", format_count(config.start));
    }
    if let Some(sample) = config.sample {
        println!("   Sample size: {}", format_count(sample));
    }
    println!("   Output file: {}", config.output.display());
    println!();
    println!(
        "📦 Estimated file size: {}",
        format_file_size(config.estimated_size()?)
    );
    println!();
    Ok(())
}

/// Ask before writing a very large wordlist. Declining or pressing
/// Esc/Ctrl-C at the prompt counts as "no".
fn confirm_large_run(config: &GenerationConfig) -> Result<bool> {
    let message = format!(
        "This will generate {} combinations. Continue?",
        format_count(config.window_size()?)
    );

    match Confirm::new(&message).with_default(false).prompt() {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn install_interrupt_handler(token: CancelToken) {
    if let Err(e) = ctrlc::set_handler(move || token.cancel()) {
        tracing::warn!(error = %e, "Could not install Ctrl-C handler");
    }
}

fn progress_bar(len: u128) -> ProgressBar {
    let bar = ProgressBar::new(clamp_u64(len));
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {human_pos}/{human_len} ({percent}%) {per_sec} ETA {eta}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    bar.set_style(style);
    bar
}

fn clamp_u64(n: u128) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

/// Display the outcome of a run
fn display_summary(summary: &WriteSummary) {
    println!();
    match summary.status {
        RunStatus::Completed => {
            println!(
                "✅ Successfully generated {} combinations!",
                format_count(summary.written)
            );
        }
        RunStatus::Interrupted => {
            println!("⚠️  Generation interrupted by user.");
            println!(
                "   Wrote {} of {} combinations. Resume with --start {}",
                format_count(summary.written),
                format_count(summary.planned),
                summary.next_start()
            );
        }
    }

    println!(
        "⏱️  Time elapsed: {:.2} seconds",
        summary.elapsed.as_secs_f64()
    );
    if summary.written > 0 {
        println!("📈 Rate: {:.0} combinations/s", summary.rate());
    }
    if let Some(output) = &summary.output {
        println!("📄 Output file: {}", output.display());
        println!("📦 File size: {}", format_file_size(file_size(output, summary)));
    }
}

/// Size on disk, falling back to the bytes the writer counted
fn file_size(path: &Path, summary: &WriteSummary) -> u128 {
    match std::fs::metadata(path) {
        Ok(meta) => u128::from(meta.len()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Could not stat output file");
            u128::from(summary.bytes_written)
        }
    }
}
