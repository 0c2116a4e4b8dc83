//! `lss` - list directory contents with file sequences compressed
//! into frame ranges

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;

use frameseq_core::{Config, SequenceScanner, DEFAULT_FORMAT, DEFAULT_RANGE_SEPARATOR, GLOBAL_FORMAT};
use frameseq_cli::error::CliError;
use frameseq_cli::input;
use frameseq_cli::output::{JsonFormatter, OutputFormatter, TextFormatter};
use frameseq_cli::walk;

/// List directory contents, compressing numbered file sequences into
/// frame ranges
#[derive(Debug, Parser)]
#[command(name = "lss", version, long_about = None)]
struct Cli {
    /// Directories or glob patterns to list (default: current directory)
    #[arg(value_name = "PATH")]
    paths: Vec<String>,

    /// Template for sequence lines, e.g. "%h%p%t %R"
    #[arg(short, long, value_name = "TEMPLATE")]
    format: Option<String>,

    /// Recurse into directories, optionally limited to LEVEL (-r=2)
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "-1"
    )]
    recursive: Option<i64>,

    /// Treat differing zero-pad widths as distinct sequences
    #[arg(short, long)]
    strict: bool,

    /// Separator joining broken-range tokens
    #[arg(long, value_name = "SEP", default_value = DEFAULT_RANGE_SEPARATOR)]
    separator: String,

    /// Custom frame-matching regex; the first capture group is the frame
    #[arg(short, long, value_name = "REGEX")]
    pattern: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputKind,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputKind {
    /// One formatted line per sequence
    Text,
    /// JSON array of sequences with frame ranges
    Json,
}

impl Cli {
    fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting sequence listing");
        log::debug!("Arguments: {:?}", self);

        let config = self.build_config()?;
        let scanner = SequenceScanner::with_config(config);

        match self.recursive {
            Some(level) => self.run_recursive(level, &scanner),
            None => self.run_flat(&scanner),
        }
    }

    /// Flat listing: resolve arguments, scan, print one line per sequence
    fn run_flat(&self, scanner: &SequenceScanner) -> Result<()> {
        let args = self.resolve_args();
        let entries = input::resolve_entries(&args)?;
        log::debug!("Resolved {} entries", entries.len());

        let mut sequences = scanner.scan(entries).into_sequences();
        sequences.sort_by(frameseq_cli::sort::listing_order);
        let template = self.template(GLOBAL_FORMAT);

        let mut formatter = self.formatter(&template);
        for sequence in &sequences {
            formatter.format_sequence(sequence)?;
        }
        formatter.finish()
    }

    /// Recursive listing: walk each directory argument as a tree
    fn run_recursive(&self, level: i64, scanner: &SequenceScanner) -> Result<()> {
        // Zero or negative walks the entire tree
        let level = usize::try_from(level).ok().filter(|&n| n > 0);
        let template = self.template(DEFAULT_FORMAT);

        let mut dirs: Vec<String> = self
            .resolve_args()
            .into_iter()
            .filter(|p| Path::new(p).is_dir())
            .collect();
        if dirs.is_empty() {
            anyhow::bail!("No directories to walk");
        }
        dirs.sort();
        dirs.dedup();

        match self.output {
            OutputKind::Text => {
                let stdout = std::io::stdout();
                let mut writer = stdout.lock();
                for dir in &dirs {
                    walk::render_tree(&mut writer, Path::new(dir), level, &template, scanner)?;
                }
                Ok(())
            }
            OutputKind::Json => {
                let mut formatter = JsonFormatter::new(std::io::stdout());
                for dir in &dirs {
                    for entry in walk::walk(Path::new(dir), level, scanner)? {
                        for sequence in &entry.sequences {
                            formatter.format_sequence(sequence)?;
                        }
                    }
                }
                formatter.finish()
            }
        }
    }

    /// Positional arguments, falling back to piped stdin lines or the
    /// current directory
    fn resolve_args(&self) -> Vec<String> {
        if !self.paths.is_empty() {
            return self.paths.clone();
        }

        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            let lines: Vec<String> = std::io::read_to_string(stdin)
                .unwrap_or_default()
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
            if !lines.is_empty() {
                return lines;
            }
        }

        vec![".".to_string()]
    }

    fn build_config(&self) -> Result<Config> {
        let mut builder = Config::builder()
            .strict_padding(self.strict)
            .range_separator(&self.separator);
        if let Some(pattern) = &self.pattern {
            builder = builder
                .frame_pattern(pattern)
                .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;
        }
        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    fn template(&self, default: &str) -> String {
        self.format.clone().unwrap_or_else(|| default.to_string())
    }

    fn formatter(&self, template: &str) -> Box<dyn OutputFormatter> {
        match self.output {
            OutputKind::Text => Box::new(TextFormatter::stdout(template)),
            OutputKind::Json => Box::new(JsonFormatter::new(std::io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
