use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use redraft_config::Config;
use redraft_engine::{
    CommandRewriter, CsvLog, DocumentReport, GenerationParams, IdentityRewriter, Mode,
    RefineSettings, Refiner, Rewriter, SurfaceOracle, analyze, compare, highlight,
    parse_document, parsing::snapshot::normalize, read_markdown_file, save_markdown_file,
};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Debug, Parser)]
#[command(
    name = "redraft",
    version,
    about = "Paraphrase or expand text while keeping its markdown structure"
)]
struct Cli {
    /// Config file to use instead of ~/.config/redraft/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrite a document and report what changed
    Refine(RefineArgs),

    /// Word-level change statistics between two texts
    Compare {
        original: PathBuf,
        rewritten: PathBuf,
        /// Print a highlighted HTML diff instead of JSON statistics
        #[arg(long)]
        html: bool,
    },

    /// Report repeated content words
    Repetition {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
        /// Proximity window, in content words
        #[arg(long)]
        window: Option<usize>,
    },

    /// Print the structure elements of a markdown file
    Parse { file: PathBuf },
}

#[derive(Debug, Args)]
struct RefineArgs {
    /// Input file; stdin when omitted
    file: Option<PathBuf>,

    /// Treat the input as markdown (implied by a .md extension)
    #[arg(long)]
    markdown: bool,

    #[arg(long)]
    mode: Option<Mode>,

    #[arg(long)]
    model: Option<String>,

    #[arg(long)]
    max_sentences: Option<usize>,

    #[arg(long)]
    target_words: Option<usize>,

    #[arg(long)]
    temperature: Option<f64>,

    #[arg(long)]
    top_p: Option<f64>,

    #[arg(long)]
    max_length: Option<usize>,

    #[arg(long)]
    num_beams: Option<usize>,

    /// Fail instead of keeping original text when a rewrite fails
    #[arg(long)]
    strict: bool,

    /// Write the full JSON report to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Do not append to the CSV results log
    #[arg(long)]
    no_log: bool,

    /// External rewriter program and its arguments; must come last
    #[arg(
        long = "rewriter-cmd",
        value_name = "CMD",
        num_args = 1..,
        allow_hyphen_values = true
    )]
    rewriter_cmd: Option<Vec<String>>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Refine(args) => refine(args, &config),
        Commands::Compare {
            original,
            rewritten,
            html,
        } => compare_files(&original, &rewritten, html),
        Commands::Repetition { file, window } => {
            let text = read_input(file.as_deref())?;
            let report = analyze(&text, window.unwrap_or(config.window));
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::Parse { file } => parse_file(&file),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    match loaded {
        Some(config) => Ok(config),
        None => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("md"))
}

fn refine(args: RefineArgs, config: &Config) -> Result<()> {
    let markdown = args.markdown || args.file.as_deref().is_some_and(is_markdown_path);
    let text = match args.file.as_deref() {
        Some(path) if is_markdown_path(path) => read_markdown_file(path)?,
        other => read_input(other)?,
    };
    let original_name = args
        .file
        .as_deref()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin.md".to_string());

    let mode = match args.mode {
        Some(mode) => mode,
        None => config.mode.parse()?,
    };
    let settings = RefineSettings {
        mode,
        model: args.model.or_else(|| config.model.clone()),
        params: GenerationParams {
            temperature: args.temperature.unwrap_or(config.temperature),
            top_p: args.top_p.unwrap_or(config.top_p),
            max_length: args.max_length.unwrap_or(config.max_length),
            num_beams: args.num_beams.unwrap_or(config.num_beams),
        },
        max_sentences: args.max_sentences.unwrap_or(config.max_sentences),
        target_words: Some(args.target_words.unwrap_or(config.target_words)),
        require_full_success: args.strict,
    };

    let argv = args
        .rewriter_cmd
        .or_else(|| config.rewriter_command.clone())
        .unwrap_or_default();
    let rewriter: Box<dyn Rewriter> = match CommandRewriter::from_argv(&argv) {
        Some(command) => Box::new(command),
        None => {
            log::warn!("No rewriter command configured, text passes through unchanged");
            Box::new(IdentityRewriter)
        }
    };

    let refiner = Refiner::new(rewriter.as_ref(), settings);
    let refined = if markdown {
        refiner.refine_markdown(&text)?
    } else {
        refiner.refine_text(&text)?
    };
    log::info!(
        "Rewrote {}/{} units with {}",
        refined.rewritten_units,
        refined.units,
        refined.model.name
    );

    print!("{}", refined.text);
    if !refined.text.ends_with('\n') {
        println!();
    }

    let oracle = SurfaceOracle::new(config.window);
    let report = DocumentReport::build(&text, &refined.text, &oracle, mode, refined.model.name);

    if let Some(path) = args.report.as_deref() {
        let body = serde_json::json!({
            "report": report,
            "warnings": refined.warnings,
            "units": refined.units,
            "rewritten_units": refined.rewritten_units,
        });
        fs::write(path, serde_json::to_string_pretty(&body)?)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
    }

    if !args.no_log {
        CsvLog::new(config.csv_log_path.clone()).append(&report.to_log_record())?;
    }

    if markdown {
        save_markdown_file(&refined.text, &original_name, &config.results_dir)?;
    }

    Ok(())
}

fn compare_files(original: &Path, rewritten: &Path, html: bool) -> Result<()> {
    let original = read_input(Some(original))?;
    let rewritten = read_input(Some(rewritten))?;
    let comparison = compare(&original, &rewritten);

    if html {
        let diff = highlight(&comparison);
        println!("<div class=\"original\">{}</div>", diff.original);
        println!("<div class=\"rewritten\">{}</div>", diff.rewritten);
    } else {
        println!("{}", serde_json::to_string_pretty(&comparison.statistics)?);
    }
    Ok(())
}

fn parse_file(path: &Path) -> Result<()> {
    let source = read_input(Some(path))?;
    let doc = parse_document(&source);
    let snap = normalize(&doc.elements);

    for (element, summary) in doc.elements.iter().zip(&snap.elements) {
        println!("{}\t{}\t{:?}", element.position, summary.kind, element.raw_text);
    }
    Ok(())
}
