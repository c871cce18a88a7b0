//! File-level tests for the collection CSV decoder.

use std::io::Write;

use karuta_tagger::read_cards_csv;
use tempfile::NamedTempFile;

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_standard_export() {
    let file = csv_file(
        "code,character,series,burnValue,edition,wishlists\n\
         v4k,Rem,Re:Zero,409.5,2,120\n\
         x9j,Asuka,Evangelion,88,1,45\n",
    );
    let cards = read_cards_csv(file.path()).unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].code, "v4k");
    assert_eq!(cards[0].burn_value, 409.5);
    assert_eq!(cards[0].edition, 2);
    assert_eq!(cards[1].wishlists, 45);
}

#[test]
fn test_read_with_alias_headers() {
    let file = csv_file(
        "print,name,anime,burn\n\
         12,Megumin,Konosuba,3\n",
    );
    let cards = read_cards_csv(file.path()).unwrap();
    assert_eq!(cards[0].code, "12");
    assert_eq!(cards[0].character, "Megumin");
    assert_eq!(cards[0].series, "Konosuba");
    assert_eq!(cards[0].burn_value, 3.0);
}

#[test]
fn test_read_trims_whitespace() {
    let file = csv_file(
        "code,character,series,burnValue\n\
         a1 ,  Rem , Re:Zero , 5\n",
    );
    let cards = read_cards_csv(file.path()).unwrap();
    assert_eq!(cards[0].code, "a1");
    assert_eq!(cards[0].character, "Rem");
}

#[test]
fn test_read_without_burn_column_defaults_to_zero() {
    let file = csv_file(
        "code,character,series\n\
         a1,Rem,Re:Zero\n",
    );
    let cards = read_cards_csv(file.path()).unwrap();
    assert_eq!(cards[0].burn_value, 0.0);
}

#[test]
fn test_read_short_rows_are_padded() {
    let file = csv_file(
        "code,character,series,burnValue\n\
         a1,Rem\n",
    );
    let cards = read_cards_csv(file.path()).unwrap();
    assert_eq!(cards[0].series, "Unknown");
    assert_eq!(cards[0].burn_value, 0.0);
}

#[test]
fn test_read_headers_only_fails() {
    let file = csv_file("code,character,series,burnValue\n");
    let err = read_cards_csv(file.path()).unwrap_err();
    assert!(err.to_string().contains("no card rows"));
}

#[test]
fn test_read_unidentifiable_columns_fails() {
    let file = csv_file(
        "alpha,beta,gamma\n\
         1,2,3\n",
    );
    let err = read_cards_csv(file.path()).unwrap_err();
    assert!(err.to_string().contains("available columns"));
}

#[test]
fn test_read_missing_file_fails() {
    let err = read_cards_csv("/nonexistent/collection.csv").unwrap_err();
    assert!(err.to_string().contains("Failed to open CSV file"));
}

#[test]
fn test_read_worker_columns() {
    let file = csv_file(
        "code,character,series,burnValue,worker.effort,worker.style,worker.vanity\n\
         a1,Rem,Re:Zero,5,3,A,B\n",
    );
    let cards = read_cards_csv(file.path()).unwrap();
    assert_eq!(cards[0].worker.effort, 3);
    assert_eq!(cards[0].worker.style, "A");
    assert_eq!(cards[0].worker.vanity, "B");
}
