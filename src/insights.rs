//! Keyword and content analysis of extracted attachments.

use crate::text;
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

static SIGNED_ON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)signed on\s*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})")
        .expect("signed-on pattern should compile")
});

/// A finding about one attachment, rendered as a short sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Insight {
    ConsentLetter,
    IntimationLetter,
    BoardResolution,
    UnanimousApproval,
    /// Carries the date exactly as written in the attachment.
    ConsentSignedOn(String),
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::ConsentLetter => {
                f.write_str("A consent letter confirming the auditor's acceptance has been signed.")
            }
            Insight::IntimationLetter => {
                f.write_str("An intimation letter regarding the appointment is attached.")
            }
            Insight::BoardResolution => {
                f.write_str("A board resolution approving the auditor's appointment is included.")
            }
            Insight::UnanimousApproval => {
                f.write_str("The board approved the appointment unanimously.")
            }
            Insight::ConsentSignedOn(date) => write!(f, "Consent was signed on {date}."),
        }
    }
}

/// Deduplicated insights, kept in the order they were first found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightSet {
    items: Vec<Insight>,
}

impl InsightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `insight` unless an equal one is already present.
    /// Returns whether it was added.
    pub fn insert(&mut self, insight: Insight) -> bool {
        if self.items.contains(&insight) {
            return false;
        }
        self.items.push(insight);
        true
    }

    pub fn contains(&self, insight: &Insight) -> bool {
        self.items.contains(insight)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Insight> {
        self.items.iter()
    }

    /// Rendered sentences, one per insight.
    pub fn sentences(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }
}

impl Extend<Insight> for InsightSet {
    fn extend<I: IntoIterator<Item = Insight>>(&mut self, iter: I) {
        for insight in iter {
            self.insert(insight);
        }
    }
}

impl FromIterator<Insight> for InsightSet {
    fn from_iter<I: IntoIterator<Item = Insight>>(iter: I) -> Self {
        let mut set = InsightSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a InsightSet {
    type Item = &'a Insight;
    type IntoIter = std::slice::Iter<'a, Insight>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Insights implied by an attachment's file name (case-insensitive).
pub fn filename_insights(file_name: &str) -> Vec<Insight> {
    let lower = file_name.to_lowercase();
    let mut found = Vec::new();

    if lower.contains("consent") {
        found.push(Insight::ConsentLetter);
    }
    if lower.contains("intimation") {
        found.push(Insight::IntimationLetter);
    }
    if lower.contains("resolution") || lower.contains("board") {
        found.push(Insight::BoardResolution);
    }

    found
}

/// Insights found in an attachment's text.
///
/// ```
/// use adt1extract::insights::{content_insights, Insight};
///
/// let found = content_insights("Resolved UNANIMOUSLY. Signed on 29/09/2023 at Pune.");
/// assert_eq!(
///     found,
///     vec![Insight::UnanimousApproval, Insight::ConsentSignedOn("29/09/2023".into())]
/// );
/// ```
pub fn content_insights(content: &str) -> Vec<Insight> {
    let mut found = Vec::new();

    if content.to_lowercase().contains("unanimous") {
        found.push(Insight::UnanimousApproval);
    }
    if let Some(date) = SIGNED_ON.captures(content).and_then(|caps| caps.get(1)) {
        found.push(Insight::ConsentSignedOn(date.as_str().to_string()));
    }

    found
}

/// Load the text of an attachment whose content can be analyzed.
///
/// Returns `Ok(None)` for types other than `.txt` and `.pdf`.
fn attachment_text(path: &Path) -> crate::Result<Option<String>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

    if ext.eq_ignore_ascii_case("txt") {
        Ok(Some(std::fs::read_to_string(path)?))
    } else if ext.eq_ignore_ascii_case("pdf") {
        Ok(Some(text::extract_text(path)?))
    } else {
        Ok(None)
    }
}

/// Derive insights from every attachment path.
///
/// Name checks apply to every file. Content checks apply only to `.txt`
/// and `.pdf` files; a file whose content cannot be read is logged and
/// contributes only its name-based insights.
pub fn analyze_attachments<P: AsRef<Path>>(paths: &[P]) -> InsightSet {
    let mut insights = InsightSet::new();

    for path in paths {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        insights.extend(filename_insights(&file_name));

        match attachment_text(path) {
            Ok(Some(content)) => insights.extend(content_insights(&content)),
            Ok(None) => {}
            Err(e) => tracing::warn!(path = %path.display(), "could not read attachment content: {e}"),
        }
    }

    insights
}
