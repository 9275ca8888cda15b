//! Narrative summary of a filing.

use crate::{FormRecord, InsightSet};

/// `value`, or `placeholder` when the field was not found.
fn or_default<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Render `record` into the fixed summary paragraph, followed by an
/// "Additional insights" bullet list when `insights` holds anything.
///
/// ```
/// use adt1extract::{generate_summary, FormRecord};
///
/// let summary = generate_summary(&FormRecord::default(), None);
/// assert!(summary.starts_with("The company has appointed an auditor"));
/// assert!(!summary.contains("Additional insights"));
/// ```
pub fn generate_summary(record: &FormRecord, insights: Option<&InsightSet>) -> String {
    let mut summary = format!(
        "{company} has appointed {auditor} as its statutory auditor, effective from {date}. \
         The company's Corporate Identification Number (CIN) is {cin}, and its registered office is located at {office}. \
         The appointment is classified as a {kind}, \
         with the auditor holding FRN/Membership Number {frn}. \
         All relevant disclosures and documents have been duly submitted as per regulatory requirements.",
        company = or_default(&record.company_name, "The company"),
        auditor = or_default(&record.auditor_name, "an auditor"),
        date = or_default(&record.appointment_date, "the specified date"),
        cin = or_default(&record.cin, "N/A"),
        office = or_default(&record.registered_office, "N/A"),
        kind = or_default(&record.appointment_type, "not specified"),
        frn = or_default(&record.auditor_frn_or_membership, "N/A"),
    );

    if let Some(insights) = insights.filter(|set| !set.is_empty()) {
        let bullets: Vec<String> = insights.iter().map(|i| format!("- {i}")).collect();
        summary.push_str("\n\nAdditional insights:\n");
        summary.push_str(&bullets.join("\n"));
    }

    summary
}
