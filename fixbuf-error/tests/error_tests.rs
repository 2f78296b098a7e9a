//! Tests for the public error surface

use fixbuf_error::{codes, Error, ErrorCategory, ErrorKind, ErrorSource, Result};

fn fails() -> Result<u32> {
    Err(Error::empty_collection("BoundedStack empty"))
}

fn propagates() -> Result<u32> {
    let value = fails()?;
    Ok(value + 1)
}

#[test]
fn question_mark_propagates_unchanged() {
    let err = propagates().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyCollection);
    assert_eq!(err.message, "BoundedStack empty");
}

#[test]
fn display_includes_category_code_and_message() {
    let err = Error::capacity_exceeded("BoundedQueue full");
    let rendered = err.to_string();
    assert_eq!(rendered, "[Capacity][E03E8] BoundedQueue full");
}

#[test]
fn error_source_trait_matches_fields() {
    let err = Error::index_out_of_range("BoundedList index out of range");
    let source: &dyn ErrorSource = &err;
    assert_eq!(source.code(), codes::INDEX_OUT_OF_RANGE);
    assert_eq!(source.category(), ErrorCategory::Bounds);
    assert_eq!(source.message(), "BoundedList index out of range");
}

#[test]
fn kind_codes_are_canonical() {
    assert_eq!(Error::from(ErrorKind::CapacityExceeded).code, ErrorKind::CapacityExceeded.code());
    assert_eq!(Error::from(ErrorKind::EmptyCollection).code, codes::EMPTY_COLLECTION);
    assert_eq!(ErrorKind::IndexOutOfRange.to_string(), "Index out of range");
}

#[test]
fn errors_are_copy_and_comparable() {
    let a = Error::capacity_exceeded("BoundedStack full");
    let b = a;
    assert_eq!(a, b);
    assert_ne!(a, Error::capacity_exceeded("BoundedQueue full"));
}
