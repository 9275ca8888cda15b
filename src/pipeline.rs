//! The end-to-end run over one filing.

use crate::{
    analyze_attachments, extract_fields, generate_summary, persist, ExtractorConfig,
    FilingAnalyzer, FormRecord, InsightSet, Result,
};
use std::path::{Path, PathBuf};

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub record: FormRecord,
    pub record_path: PathBuf,
    /// Slots in the filing's attachment table, including unreadable ones.
    pub attachment_slots: usize,
    pub attachments: Vec<PathBuf>,
    pub insights: InsightSet,
    pub summary: String,
    pub summary_path: PathBuf,
}

/// Steps of a run, reported as they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    ExtractingText,
    ExtractingFields,
    RecordSaved(&'a Path),
    ExtractingAttachments,
    AttachmentsExtracted { written: &'a [PathBuf], slots: usize },
    GeneratingSummary,
    SummarySaved(&'a Path),
}

/// Process `pdf_path` start to finish: text, fields, `output.json`,
/// attachments, insights, summary, `summary.txt`.
///
/// Only a failure to open or parse the filing itself (or to write the two
/// output files) is an error; attachment problems are logged and skipped.
pub fn process_filing<P: AsRef<Path>>(pdf_path: P, config: &ExtractorConfig) -> Result<RunReport> {
    process_filing_with(pdf_path, config, |_| {})
}

/// [`process_filing`], calling `on_progress` before each step and after
/// each artifact is written.
pub fn process_filing_with<P, F>(pdf_path: P, config: &ExtractorConfig, mut on_progress: F) -> Result<RunReport>
where
    P: AsRef<Path>,
    F: FnMut(Progress<'_>),
{
    on_progress(Progress::ExtractingText);
    let analyzer = FilingAnalyzer::with_config(pdf_path, config.clone())?;
    let out_dir = &config.output_directory;
    let text = analyzer.text()?;

    on_progress(Progress::ExtractingFields);
    let record = extract_fields(&text);
    let record_path = persist::save_record(&record, out_dir, &config.json_filename)?;
    on_progress(Progress::RecordSaved(&record_path));

    on_progress(Progress::ExtractingAttachments);
    let attachment_slots = analyzer.count_embedded_files();
    let attachments = analyzer.extract_attachments();
    on_progress(Progress::AttachmentsExtracted {
        written: &attachments,
        slots: attachment_slots,
    });

    let insights = analyze_attachments(&attachments);
    tracing::debug!(
        attachments = attachments.len(),
        insights = insights.len(),
        "attachments analyzed"
    );

    on_progress(Progress::GeneratingSummary);
    let summary = generate_summary(&record, Some(&insights));
    let summary_path = persist::save_summary(&summary, out_dir, &config.summary_filename)?;
    on_progress(Progress::SummarySaved(&summary_path));

    Ok(RunReport {
        record,
        record_path,
        attachment_slots,
        attachments,
        insights,
        summary,
        summary_path,
    })
}
