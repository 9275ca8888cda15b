//! CLI tool for extracting fields, attachments and a summary from a
//! Form ADT-1 filing.

use adt1extract::{process_filing_with, ExtractorConfig, Progress};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extract form fields, embedded attachments and a narrative summary from an
/// auditor-appointment PDF filing.
#[derive(Parser, Debug)]
#[command(name = "adt1extract", version, about)]
struct Cli {
    /// Path to the PDF filing
    pdf: PathBuf,

    /// Directory receiving output.json, summary.txt and the attachments
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Skip any attachment larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_attachment_size: Option<usize>,

    /// Also extract files attached through page annotations
    #[arg(long)]
    include_annotations: bool,

    /// Log each written artifact
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "adt1extract=info"
    } else {
        "adt1extract=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ExtractorConfig {
        output_directory: cli.output_dir.clone(),
        max_embedded_file_size: cli.max_attachment_size,
        include_annotation_attachments: cli.include_annotations,
        ..Default::default()
    };

    match process_filing_with(&cli.pdf, &config, print_progress) {
        Ok(_) => println!("\n✅ All tasks completed successfully!"),
        Err(e) => {
            eprintln!("[!] Error: {e}");
            process::exit(1);
        }
    }
}

fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::ExtractingText => println!("[•] Extracting text from main PDF..."),
        Progress::ExtractingFields => println!("[•] Extracting form fields..."),
        Progress::RecordSaved(path) => println!("[✓] Extracted data saved to {}", path.display()),
        Progress::ExtractingAttachments => println!("[•] Extracting and analyzing attachments..."),
        Progress::AttachmentsExtracted { written, slots } => {
            for path in written {
                println!("[✓] Attachment extracted: {}", path.display());
            }
            if written.len() < slots {
                println!(
                    "[!] {} of {} attachment(s) could not be extracted",
                    slots - written.len(),
                    slots
                );
            }
        }
        Progress::GeneratingSummary => println!("[•] Generating summary..."),
        Progress::SummarySaved(path) => println!("[✓] Summary saved to {}", path.display()),
    }
}
