use adt1extract::{extract_fields, FormField, FormRecord};

#[test]
fn values_are_trimmed() {
    let record = extract_fields("Company Name :    Acme Pvt Ltd   \r\nCIN : U12345MH2020PTC111111\n");
    assert_eq!(record.company_name, "Acme Pvt Ltd");
    assert_eq!(record.cin, "U12345MH2020PTC111111");
}

#[test]
fn absent_labels_leave_empty_strings() {
    let record = extract_fields("nothing recognisable here");
    assert_eq!(record, FormRecord::default());
    for (_, value) in record.entries() {
        assert_eq!(value, "");
    }
}

#[test]
fn labels_match_case_insensitively() {
    let record = extract_fields("company name: Beta Industries Limited\nauditor name:K. Iyer & Co\n");
    assert_eq!(record.company_name, "Beta Industries Limited");
    assert_eq!(record.auditor_name, "K. Iyer & Co");
}

#[test]
fn first_match_wins() {
    let record = extract_fields("Auditor Name : First LLP\nAuditor Name : Second LLP\n");
    assert_eq!(record.auditor_name, "First LLP");
}

#[test]
fn value_stops_at_end_of_line() {
    let record = extract_fields("Registered Office : 7 Hill Road\nBandra West\n");
    assert_eq!(record.registered_office, "7 Hill Road");
}

#[test]
fn frn_and_membership_labels_fill_the_same_field() {
    let frn = extract_fields("FRN : 101248W/W-100022");
    assert_eq!(frn.auditor_frn_or_membership, "101248W/W-100022");

    let membership = extract_fields("Membership Number: 045678 (partner)");
    assert_eq!(membership.auditor_frn_or_membership, "045678");
}

#[test]
fn appointment_type_accepts_only_known_values() {
    assert_eq!(
        extract_fields("Appointment Type : Reappointment").appointment_type,
        "Reappointment"
    );
    assert_eq!(
        extract_fields("Appointment Type : casual vacancy").appointment_type,
        ""
    );
}

#[test]
fn appointment_date_takes_digits_and_separators_only() {
    let record = extract_fields("Appointment Date : 01-04-2024 (effective)");
    assert_eq!(record.appointment_date, "01-04-2024");
}

#[test]
fn record_always_has_eight_keys_in_fixed_order() {
    let record = extract_fields("Company Name : Acme Pvt Ltd");
    let keys: Vec<_> = record.entries().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        [
            "company_name",
            "cin",
            "registered_office",
            "appointment_date",
            "auditor_name",
            "auditor_address",
            "auditor_frn_or_membership",
            "appointment_type",
        ]
    );

    let json: serde_json::Value = serde_json::to_value(&record).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 8);
    assert_eq!(json["company_name"], "Acme Pvt Ltd");
    assert_eq!(json["cin"], "");
}

#[test]
fn get_matches_struct_fields() {
    let record = extract_fields("CIN : L17110MH1973PLC019786");
    assert_eq!(record.get(FormField::Cin), "L17110MH1973PLC019786");
    assert_eq!(record.get(FormField::AuditorAddress), "");
}
