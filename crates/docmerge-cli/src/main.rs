mod logger;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use logger::ConsoleLogger;
use pdf_organize::{OrganizeOptions, PageSize, RunSummary};
use std::path::PathBuf;
use std::process::ExitCode;

const AFTER_HELP: &str = "\
Examples:
  # Organize a folder of documents
  docmerge /path/to/documents

  # Combine 4 sections per merged PDF instead of 3
  docmerge /path/to/documents --group-size 4

  # Only create individual section PDFs, on Letter paper
  docmerge /path/to/documents --no-combine --page-size letter

Supported formats:
  PDF (.pdf), Word (.docx), PowerPoint (.pptx), text (.txt, .md),
  images (.jpg, .jpeg, .png, .gif, .webp, .jfif, .bmp, .tiff, .heic)

Each subdirectory of the source becomes one section PDF. Sections are then
grouped into combined PDFs, and everything that cannot be merged is copied
to Set_Aside.";

#[derive(Parser)]
#[command(
    name = "docmerge",
    about = "Organize and merge documents into structured PDFs",
    version,
    after_help = AFTER_HELP
)]
struct Cli {
    /// Source directory containing documents to organize
    source: PathBuf,

    /// Output directory (default: <source>_Organized beside the source)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sections per combined PDF, 0 to disable [default: 3]
    #[arg(short, long)]
    group_size: Option<usize>,

    /// Skip creating combined PDFs
    #[arg(long)]
    no_combine: bool,

    /// Page size for converted documents [default: a4]
    #[arg(short, long, value_enum, ignore_case = true)]
    page_size: Option<PageSizeArg>,

    /// Skip title pages on section and combined PDFs
    #[arg(long)]
    no_titles: bool,

    /// Skip source labels on converted images
    #[arg(long)]
    no_labels: bool,

    /// Set Word documents aside instead of converting them
    #[arg(long)]
    no_docx: bool,

    /// Set PowerPoint decks aside instead of converting them
    #[arg(long)]
    no_slides: bool,

    /// Set text and markdown files aside instead of converting them
    #[arg(long)]
    no_text: bool,

    /// Load options from a JSON file; flags given here take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quiet mode - minimal output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A4,
    Letter,
}

impl From<PageSizeArg> for PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => Self::A4,
            PageSizeArg::Letter => Self::Letter,
        }
    }
}

impl Cli {
    /// Start from the config file (or defaults) and apply the flags on top
    async fn options(&self) -> Result<OrganizeOptions> {
        let mut options = match &self.config {
            Some(path) => OrganizeOptions::load(path)
                .await
                .with_context(|| format!("Cannot load config {}", path.display()))?,
            None => OrganizeOptions::default(),
        };

        options.source_dir = std::fs::canonicalize(&self.source).unwrap_or(self.source.clone());

        if let Some(output) = &self.output {
            options.output_dir = Some(absolute(output));
        }
        if let Some(group_size) = self.group_size {
            options.group_size = group_size;
        }
        if self.no_combine {
            options.group_size = 0;
        }
        if let Some(page_size) = self.page_size {
            options.page_size = page_size.into();
        }
        if self.no_titles {
            options.title_pages = false;
        }
        if self.no_labels {
            options.source_labels = false;
        }
        if self.no_docx {
            options.formats.word_docs = false;
        }
        if self.no_slides {
            options.formats.slide_decks = false;
        }
        if self.no_text {
            options.formats.text = false;
        }

        Ok(options)
    }
}

/// Resolve a path against the working directory without requiring it to exist
fn absolute(path: &std::path::Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };
    if let Err(e) = ConsoleLogger::new(level).init() {
        eprintln!("Warning: console logging unavailable: {}", e);
    }

    match run(&cli).await {
        Ok(summary) => {
            if !cli.quiet {
                println!("\nOutput saved to: {}", summary.output_dir.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\nError: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<RunSummary> {
    let options = cli.options().await?;

    let task = pdf_organize::organize(options);
    tokio::pin!(task);

    tokio::select! {
        result = &mut task => Ok(result?),
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => {
                eprintln!("\nOperation cancelled by user.");
                // The blocking worker cannot be cancelled; leave without joining it
                std::process::exit(1);
            }
            Err(e) => {
                log::warn!("Cannot listen for Ctrl-C: {}", e);
                Ok(task.await?)
            }
        },
    }
}
