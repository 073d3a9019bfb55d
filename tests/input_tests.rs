//! Input adapters feeding the validation and calculation pipeline.

#![cfg(feature = "input")]

use billcraft::core::*;
use billcraft::input::*;
use rust_decimal_macros::dec;
use std::io::Write;

#[test]
fn json_record_flows_through_validation_and_totals() {
    let invoice = from_json_str(
        r#"{
            "company": {"name": "ACME Corp", "address": "123 Business Street"},
            "customer": {"name": "Jane Doe", "email": "jane@example.com"},
            "items": [
                {"name": "Consulting", "quantity": 2, "price": 49.99},
                {"name": "Hardware", "quantity": 1, "price": 150.0}
            ],
            "tax_rate": 0.18,
            "discount": 10
        }"#,
    )
    .unwrap();

    assert!(validate_invoice(&invoice).is_empty());
    let summary = calculate_summary(&invoice.items, invoice.tax_rate, invoice.discount);
    assert_eq!(summary.total, dec!(284.98));
}

#[test]
fn json_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoice.json");
    std::fs::write(
        &path,
        r#"{"company": {}, "customer": {}, "items": [{"name": "A", "quantity": 1, "price": "9.99"}]}"#,
    )
    .unwrap();

    let invoice = from_json_file(&path).unwrap();
    assert_eq!(invoice.items[0].price, dec!(9.99));
}

#[test]
fn missing_json_file_is_an_io_error() {
    let err = from_json_file(std::path::Path::new("/no/such/invoice.json")).unwrap_err();
    assert!(matches!(err, InvoiceError::Io(_)));
}

#[test]
fn invalid_json_record_still_fails_validation_downstream() {
    // Parses fine (typed fields are present) but violates business rules
    let invoice = from_json_str(
        r#"{"company": {}, "customer": {}, "items": [{"name": "A", "quantity": 0, "price": 5}]}"#,
    )
    .unwrap();
    let errors = validate_invoice(&invoice);
    assert!(errors.iter().any(|e| e.field == "items[0].quantity"));
}

#[test]
fn out_of_range_price_is_rejected_before_calculation() {
    // Parses (it is a legal decimal) but must never reach the calculator,
    // where a sum of such line totals would overflow.
    let invoice = from_json_str(
        r#"{"company": {}, "customer": {},
            "items": [{"name": "A", "quantity": 2, "price": "79228162514264337593543950335"}]}"#,
    )
    .unwrap();

    let errors = validate_invoice(&invoice);
    assert!(errors.iter().any(|e| e.field == "items[0].price"));
}

#[test]
fn csv_import_uses_defaults_and_computes_totals() {
    let csv = "Item,Quantity,Price\nConsulting,2,49.99\nHardware,1,150.00\n";
    let invoice = from_csv_reader(csv.as_bytes(), &SheetDefaults::default()).unwrap();

    assert!(validate_invoice(&invoice).is_empty());
    assert_eq!(invoice.tax_rate, dec!(0.18));

    let summary = calculate_summary(&invoice.items, invoice.tax_rate, invoice.discount);
    assert_eq!(summary.subtotal, dec!(249.98));
    assert_eq!(summary.tax, dec!(45.00));
    assert_eq!(summary.total, dec!(294.98));
}

#[test]
fn csv_file_import() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Item,Quantity,Price").unwrap();
    writeln!(file, "Widget,3,19.99").unwrap();
    drop(file);

    let invoice = from_csv_file(&path, &SheetDefaults::default()).unwrap();
    assert_eq!(invoice.items.len(), 1);
    assert_eq!(invoice.items[0].line_total(), dec!(59.97));
}

#[test]
fn empty_csv_fails_validation_not_parsing() {
    let invoice = from_csv_reader("Item,Quantity,Price\n".as_bytes(), &SheetDefaults::default())
        .unwrap();
    let errors = validate_invoice(&invoice);
    assert!(errors.iter().any(|e| e.field == "items"));
}
