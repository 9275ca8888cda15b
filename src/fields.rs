//! Regex-driven extraction of the fixed Form ADT-1 fields.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// The eight fields read from a filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    CompanyName,
    Cin,
    RegisteredOffice,
    AppointmentDate,
    AuditorName,
    AuditorAddress,
    AuditorFrnOrMembership,
    AppointmentType,
}

impl FormField {
    /// All fields, in output order.
    pub const ALL: [FormField; 8] = [
        FormField::CompanyName,
        FormField::Cin,
        FormField::RegisteredOffice,
        FormField::AppointmentDate,
        FormField::AuditorName,
        FormField::AuditorAddress,
        FormField::AuditorFrnOrMembership,
        FormField::AppointmentType,
    ];

    /// JSON key of this field.
    pub fn key(self) -> &'static str {
        match self {
            FormField::CompanyName => "company_name",
            FormField::Cin => "cin",
            FormField::RegisteredOffice => "registered_office",
            FormField::AppointmentDate => "appointment_date",
            FormField::AuditorName => "auditor_name",
            FormField::AuditorAddress => "auditor_address",
            FormField::AuditorFrnOrMembership => "auditor_frn_or_membership",
            FormField::AppointmentType => "appointment_type",
        }
    }
}

/// Values extracted from one filing. A field that was not found holds the
/// empty string; it is never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub company_name: String,
    pub cin: String,
    pub registered_office: String,
    pub appointment_date: String,
    pub auditor_name: String,
    pub auditor_address: String,
    pub auditor_frn_or_membership: String,
    pub appointment_type: String,
}

impl FormRecord {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CompanyName => &self.company_name,
            FormField::Cin => &self.cin,
            FormField::RegisteredOffice => &self.registered_office,
            FormField::AppointmentDate => &self.appointment_date,
            FormField::AuditorName => &self.auditor_name,
            FormField::AuditorAddress => &self.auditor_address,
            FormField::AuditorFrnOrMembership => &self.auditor_frn_or_membership,
            FormField::AppointmentType => &self.appointment_type,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::CompanyName => &mut self.company_name,
            FormField::Cin => &mut self.cin,
            FormField::RegisteredOffice => &mut self.registered_office,
            FormField::AppointmentDate => &mut self.appointment_date,
            FormField::AuditorName => &mut self.auditor_name,
            FormField::AuditorAddress => &mut self.auditor_address,
            FormField::AuditorFrnOrMembership => &mut self.auditor_frn_or_membership,
            FormField::AppointmentType => &mut self.appointment_type,
        }
    }

    /// `(key, value)` pairs in output order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FormField::ALL.into_iter().map(move |f| (f.key(), self.get(f)))
    }
}

/// One row of the extraction table: which field, its pattern, and which
/// capture group holds the value.
struct FieldPattern {
    field: FormField,
    regex: Regex,
    group: usize,
}

static FIELD_PATTERNS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    [
        (FormField::CompanyName, r"Company Name\s*:\s*(.+)", 1),
        (FormField::Cin, r"CIN\s*:\s*([A-Z0-9]+)", 1),
        (FormField::RegisteredOffice, r"Registered Office\s*:\s*(.+)", 1),
        (FormField::AppointmentDate, r"Appointment Date\s*:\s*([\d/-]+)", 1),
        (FormField::AuditorName, r"Auditor Name\s*:\s*(.+)", 1),
        (FormField::AuditorAddress, r"Auditor Address\s*:\s*(.+)", 1),
        // Either label is accepted; the value is always the second group.
        (FormField::AuditorFrnOrMembership, r"(FRN|Membership Number)\s*:\s*(\S+)", 2),
        (
            FormField::AppointmentType,
            r"Appointment Type\s*:\s*(New Appointment|Reappointment)",
            1,
        ),
    ]
    .into_iter()
    .map(|(field, pattern, group)| FieldPattern {
        field,
        regex: Regex::new(&format!("(?i){pattern}")).expect("field pattern should compile"),
        group,
    })
    .collect()
});

/// Run every field pattern over `text` and collect the first match of each.
///
/// ```
/// use adt1extract::extract_fields;
///
/// let record = extract_fields("Company Name : Acme Pvt Ltd\nCIN : U12345MH2020PTC111111\n");
/// assert_eq!(record.company_name, "Acme Pvt Ltd");
/// assert_eq!(record.cin, "U12345MH2020PTC111111");
/// assert_eq!(record.auditor_name, "");
/// ```
pub fn extract_fields(text: &str) -> FormRecord {
    let mut record = FormRecord::default();

    for pattern in FIELD_PATTERNS.iter() {
        let value = pattern
            .regex
            .captures(text)
            .and_then(|caps| caps.get(pattern.group))
            .map(|m| m.as_str().trim());

        if let Some(value) = value {
            *record.slot(pattern.field) = value.to_string();
        } else {
            tracing::debug!(field = pattern.field.key(), "no match");
        }
    }

    record
}
