//! hansard CLI - Hansard structure recovery tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use hansard::{Hansard, HansardResult, JsonFormat, PageSelection, DEFAULT_TRANSITION_LIMIT};

#[derive(Parser)]
#[command(name = "hansard")]
#[command(version)]
#[command(about = "Recover the structure of Hansard text exports", long_about = None)]
struct Cli {
    /// Maximum focus transitions while settling a single line
    #[arg(
        long,
        global = true,
        env = "HANSARD_TRANSITION_LIMIT",
        default_value_t = DEFAULT_TRANSITION_LIMIT
    )]
    transition_limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the line-number structure of the document as JSON
    Structure {
        /// Input transcript
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Compact JSON output (no pretty printing)
        #[arg(short, long)]
        compact: bool,
    },

    /// Convert the document to JSON
    Json {
        /// Input transcript
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Compact JSON output (no pretty printing)
        #[arg(short, long)]
        compact: bool,
    },

    /// Print a plain-text outline of the document
    Text {
        /// Input transcript
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Leave out the preface and contents
        #[arg(long)]
        body_only: bool,

        /// Spaces per outline level
        #[arg(long, default_value = "2")]
        indent: usize,
    },

    /// Show preface metadata and block counts
    Info {
        /// Input transcript
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the physical pages of the transcript
    Pages {
        /// Input transcript
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(short, long)]
        pages: Option<String>,
    },

    /// Show version information
    Version,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Structure { .. } => "structure",
            Commands::Json { .. } => "json",
            Commands::Text { .. } => "text",
            Commands::Info { .. } => "info",
            Commands::Pages { .. } => "pages",
            Commands::Version => "version",
        }
    }

    fn input(&self) -> Option<&Path> {
        match self {
            Commands::Structure { input, .. }
            | Commands::Json { input, .. }
            | Commands::Text { input, .. }
            | Commands::Info { input, .. }
            | Commands::Pages { input, .. } => Some(input.as_path()),
            Commands::Version => None,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let builder = Hansard::new().with_transition_limit(cli.transition_limit);

    match cli.command.input() {
        Some(input) => log::debug!(
            "Running {} on {} (transition limit {})",
            cli.command.name(),
            input.display(),
            cli.transition_limit
        ),
        None => log::debug!("Running {}", cli.command.name()),
    }

    let result = match cli.command {
        Commands::Structure { input, compact } => cmd_structure(builder, &input, compact),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(builder, &input, output.as_deref(), compact),
        Commands::Text {
            input,
            output,
            body_only,
            indent,
        } => cmd_text(builder, &input, output.as_deref(), body_only, indent),
        Commands::Info { input, json } => cmd_info(builder, &input, json),
        Commands::Pages { input, pages } => cmd_pages(builder, &input, pages.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        log::info!("Wrote {} bytes to {}", content.len(), path.display());
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_structure(
    builder: Hansard,
    input: &Path,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = builder.parse(input)?;
    println!("{}", result.to_structure_json(json_format(compact))?);
    Ok(())
}

fn cmd_json(
    builder: Hansard,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = builder.parse(input)?;
    let json = result.to_json(json_format(compact))?;
    write_output(output, &json)
}

fn cmd_text(
    builder: Hansard,
    input: &Path,
    output: Option<&Path>,
    body_only: bool,
    indent: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = builder.with_indent_width(indent);
    if body_only {
        builder = builder.body_only();
    }

    let text = builder.parse(input)?.to_text()?;
    write_output(output, &text)
}

struct Summary {
    pages: usize,
    lines: usize,
    sections: usize,
    paragraphs: usize,
    divisions: usize,
    attendance: usize,
}

impl Summary {
    fn of(result: &HansardResult) -> Self {
        let doc = result.document();
        Self {
            pages: result.file().page_count(),
            lines: result.file().line_count(),
            sections: doc.section_count(),
            paragraphs: doc.all_paragraphs().len(),
            divisions: doc.all_votes().len(),
            attendance: doc
                .all_sections()
                .iter()
                .filter_map(|s| s.attendance.as_ref())
                .map(|a| a.names().len())
                .sum(),
        }
    }
}

fn cmd_info(builder: Hansard, input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = builder.parse(input)?;
    let preface = result.document().preface.as_ref();
    let summary = Summary::of(&result);

    let identifier = preface.and_then(|p| p.identifier.clone());
    let session = preface.and_then(|p| p.session.clone());
    let date = preface.and_then(|p| p.session_date);

    if json {
        let value = serde_json::json!({
            "file": input.display().to_string(),
            "identifier": identifier,
            "session": session,
            "date": date,
            "pages": summary.pages,
            "lines": summary.lines,
            "sections": summary.sections,
            "paragraphs": summary.paragraphs,
            "divisions": summary.divisions,
            "attendance": summary.attendance,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Sitting Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref identifier) = identifier {
        println!("{}: {}", "ISSN".bold(), identifier);
    }
    if let Some(ref session) = session {
        println!("{}: {}", "Session".bold(), session);
    }
    if let Some(date) = date {
        println!("{}: {}", "Date".bold(), date.format("%A, %-d %B %Y"));
    }
    println!("{}: {}", "Pages".bold(), summary.pages);
    println!("{}: {}", "Lines".bold(), summary.lines);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Sections".bold(), summary.sections);
    println!("{}: {}", "Paragraphs".bold(), summary.paragraphs);
    println!("{}: {}", "Divisions".bold(), summary.divisions);
    println!("{}: {}", "Members present".bold(), summary.attendance);

    Ok(())
}

fn cmd_pages(
    builder: Hansard,
    input: &Path,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = builder;
    if let Some(selection) = pages {
        builder = builder.with_pages(PageSelection::parse(selection)?);
    }

    let result = builder.parse(input)?;
    let listing = result.page_list();
    if listing.is_empty() {
        println!("{}", "No pages selected".yellow());
    } else {
        println!("{}", listing);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "hansard".cyan().bold(), env!("CARGO_PKG_VERSION"));
}
