//! Order form behaviour: option resolution, file list integrity, guards.

mod common;

use common::builders::PrintJobBuilder;
use printaway::schema::{Customer, PaperSize};
use printaway::workflow::{FileUpload, OrderForm, PrintOptions};
use std::path::PathBuf;

fn staged(name: &str) -> FileUpload {
    FileUpload {
        name: name.to_string(),
        path: PathBuf::from(format!("/tmp/{name}")),
        size_mb: 1.5,
    }
}

fn valid_customer() -> Customer {
    Customer {
        name: "Maria Santos".to_string(),
        email: "maria@example.com".to_string(),
        phone_number: Some("09171234567".to_string()),
    }
}

#[test]
fn default_option_edits_apply_to_files_added_earlier() {
    let mut form = OrderForm::new();
    form.customer = valid_customer();
    form.add_file(staged("chapter1.pdf"));
    form.add_file(staged("chapter2.pdf"));

    // The customer picks files first, then adjusts the shared options.
    form.default_options = PrintOptions {
        copies: 3,
        is_colored: true,
        paper_size: PaperSize::A3,
    };

    let submission = form.to_submission();
    for file in &submission.files {
        assert_eq!(file.copies, 3);
        assert!(file.is_colored);
        assert_eq!(file.paper_size, PaperSize::A3);
    }
}

#[test]
fn per_file_options_used_only_when_defaults_disabled() {
    let mut form = OrderForm::new();
    form.customer = valid_customer();
    let id = form.add_file(staged("poster.pdf"));
    if let Some(entry) = form.entry_mut(id) {
        entry.options.paper_size = PaperSize::A2;
        entry.options.copies = 10;
    }

    // Defaults on: the per-file override is ignored.
    assert_eq!(form.to_submission().files[0].paper_size, PaperSize::A4);

    form.use_default_options = false;
    let file = &form.to_submission().files[0];
    assert_eq!(file.paper_size, PaperSize::A2);
    assert_eq!(file.copies, 10);
}

#[test]
fn removing_a_file_removes_its_options_with_it() {
    let mut form = OrderForm::new();
    form.use_default_options = false;
    form.add_file(staged("keep-a.pdf"));
    let doomed = form.add_file(staged("remove-me.pdf"));
    form.add_file(staged("keep-b.pdf"));

    if let Some(entry) = form.entry_mut(doomed) {
        entry.options.copies = 99;
    }

    form.remove_file(1);

    let names: Vec<_> = form.entries().iter().map(|e| e.upload.name.clone()).collect();
    assert_eq!(names, vec!["keep-a.pdf", "keep-b.pdf"]);
    assert!(form.entries().iter().all(|e| e.options.copies == 1));
}

#[test]
fn validation_covers_customer_and_files() {
    let mut form = OrderForm::new();

    let errors = form.validate();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"customer.name"));
    assert!(fields.contains(&"customer.email"));
    assert!(fields.contains(&"files"));

    form.customer = valid_customer();
    form.add_file(staged("done.pdf"));
    assert!(form.validate().is_empty());
}

#[test]
fn notes_travel_with_their_file() {
    let mut form = OrderForm::new();
    form.customer = valid_customer();
    let id = form.add_file(staged("bind-me.pdf"));
    if let Some(entry) = form.entry_mut(id) {
        entry.notes = Some("ring binding".to_string());
    }
    form.add_file(staged("plain.pdf"));

    let submission = form.to_submission();
    assert_eq!(submission.files[0].notes.as_deref(), Some("ring binding"));
    assert!(submission.files[1].notes.is_none());
}

#[test]
fn builder_jobs_round_trip_through_wire_format() {
    // The staff list payload wraps jobs in a data envelope.
    let job = PrintJobBuilder::new(7)
        .reference_code("PJ-REF007")
        .customer("Maria Santos", "maria@example.com")
        .build();
    let envelope = serde_json::json!({ "data": [job] });

    let parsed: printaway::schema::JobListResponse =
        serde_json::from_value(envelope).expect("list envelope parses");
    assert_eq!(parsed.data.len(), 1);
    assert_eq!(parsed.data[0].reference_code, "PJ-REF007");
}
