//! Integration tests for CSV loading.

use std::io::Write;

use polars::prelude::DataType;
use tempfile::NamedTempFile;

use vlp_ingest::{IngestError, read_listing_csv};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn reads_listing_csv_with_headers() {
    let file = create_temp_csv("price,mileage,date,transmission\n100,5,2018,Manual\n200,7,2019,Automatic\n");
    let df = read_listing_csv(file.path()).unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 4);
    let names: Vec<&str> = df.get_column_names_str();
    assert_eq!(names, vec!["price", "mileage", "date", "transmission"]);
}

#[test]
fn sentinel_values_keep_columns_textual() {
    let file = create_temp_csv("price,date\n\"$1,000\",2018\nna,na\n");
    let df = read_listing_csv(file.path()).unwrap();

    assert_eq!(df.column("price").unwrap().dtype(), &DataType::String);
    assert_eq!(df.column("date").unwrap().dtype(), &DataType::String);
}

#[test]
fn missing_file_is_file_not_found() {
    let err = read_listing_csv(std::path::Path::new("/no/such/listing.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
