use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use reqgen_core::{
    extract, format_output, stdlib, OutputFormat, PyPiIndex, ResolveConfig, Resolver, ScanConfig,
    SourceScanner,
};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "reqgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a requirements.txt from Python imports")]
#[command(long_about = "Scans Python source for import statements and resolves each top-level \
    module name to an installable PyPI package. Well-known import aliases (cv2, PIL, sklearn, \
    ...) are mapped to their canonical package names and verified against the PyPI JSON API; \
    names that cannot be resolved are kept in the output as comment lines.\n\n\
    Input is a Python file, a project directory, or '-' for stdin.")]
pub struct Args {
    /// Python file or project directory to scan, or '-' for stdin
    #[arg(default_value = "-")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Text)]
    pub format: OutputFormatArg,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Drop standard-library modules before resolving
    #[arg(long)]
    pub skip_stdlib: bool,

    /// Base URL of the package index JSON API
    #[arg(long, default_value = reqgen_core::DEFAULT_INDEX_URL)]
    pub index_url: String,

    /// HTTP timeout per existence check, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Additional ignore patterns for directory scans (gitignore style)
    #[arg(long, action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Ignore file path (defaults to .gitignore)
    #[arg(long)]
    pub ignore_file: Option<PathBuf>,

    /// Include virtualenv / cache directories in directory scans
    #[arg(long)]
    pub include_env_dirs: bool,

    /// Show verbose progress
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Text,
    Json,
    Yaml,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Gather import names from stdin, a file, or a directory tree
    let mut names = if args.path == PathBuf::from("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        extract(&text)
    } else {
        let mut config = ScanConfig::new(args.path.clone())
            .with_ignore_patterns(args.ignore.clone())
            .with_include_env_dirs(args.include_env_dirs);

        if let Some(ignore_file) = args.ignore_file.clone() {
            config = config.with_ignore_file(ignore_file);
        }

        let scanner = SourceScanner::new(config)?;
        scanner.scan()?
    };

    if args.skip_stdlib {
        names.retain(|name| !stdlib::is_stdlib_module(name));
    }

    if names.is_empty() {
        eprintln!("No imports found; nothing to generate.");
        if let Some(path) = args.output {
            fs::write(&path, "")?;
        }
        return Ok(());
    }

    // Show progress if verbose
    let spinner = if args.verbose {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Resolving {} imports...", names.len()));
        Some(pb)
    } else {
        None
    };

    // Resolve against the package index
    let config = ResolveConfig::new()
        .with_index_url(args.index_url)
        .with_timeout(Duration::from_secs(args.timeout));
    let index = PyPiIndex::new(&config.index_url, config.timeout)?;
    let mut resolver = Resolver::new(index);
    let report = resolver.resolve(&names).await;

    if let Some(ref pb) = spinner {
        pb.finish_with_message(format!(
            "Resolved {} of {} imports in {}ms",
            report.stats.resolved, report.stats.total_imports, report.metadata.duration_ms
        ));
    }

    let output = format_output(&report, args.format.into())?;

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)?;
        if args.verbose {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        println!("{}", output);
    }

    Ok(())
}
