//! CSV decoding for Karuta collection exports.
//!
//! Export files in the wild disagree on column naming, so the decoder maps
//! headers through alias lists (exact match, then case-insensitive, then
//! substring) before reading rows. Missing identity fields decode as
//! "Unknown" and missing numbers as zero.

use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::StringRecord;
use log::{debug, info, warn};

use crate::models::{CardRecord, WorkerTraits};

/// Column aliases for the decoded fields, tried in order
const CHARACTER_COLUMNS: &[&str] = &["character", "name", "char", "char_name", "charname"];
const SERIES_COLUMNS: &[&str] = &["series", "franchise", "origin", "anime"];
const CODE_COLUMNS: &[&str] = &["code", "id", "cardid", "card_id", "print"];
const BURN_COLUMNS: &[&str] = &["burnvalue", "burn_value", "burn", "quality", "value", "price"];

/// Resolved column indices for one header line
struct ColumnMap {
    character: usize,
    series: usize,
    code: usize,
    burn: Option<usize>,
}

/// Reads a collection CSV from disk and decodes every row into a card record
pub fn read_cards_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CardRecord>> {
    let path = path.as_ref();
    info!("Loading cards from CSV file: {path:?}");

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = reader.headers().context("Failed to read CSV headers")?.clone();
    let mut rows = Vec::new();
    for result in reader.records() {
        rows.push(result.context("Failed to read CSV record")?);
    }

    decode_rows(&headers, &rows)
}

/// Decodes raw rows against the header line. Fails when the file has no
/// data rows or when the character, series or code column cannot be
/// identified.
pub fn decode_rows(headers: &StringRecord, rows: &[StringRecord]) -> Result<Vec<CardRecord>> {
    if rows.is_empty() {
        bail!("CSV file contains no card rows");
    }

    let columns: Vec<&str> = headers.iter().collect();
    let character = find_column(&columns, CHARACTER_COLUMNS);
    let series = find_column(&columns, SERIES_COLUMNS);
    let code = find_column(&columns, CODE_COLUMNS);
    let burn = find_column(&columns, BURN_COLUMNS);

    debug!("Column mapping: character={character:?} series={series:?} code={code:?} burn={burn:?}");

    let map = match (character, series, code) {
        (Some(character), Some(series), Some(code)) => ColumnMap { character, series, code, burn },
        _ => bail!(
            "Could not identify the character, series and code columns; available columns: {}",
            columns.join(", ")
        ),
    };
    if map.burn.is_none() {
        warn!("No burn value column found; burn values default to 0");
    }

    let records: Vec<CardRecord> =
        rows.iter().map(|row| decode_row(row, &columns, &map)).collect();
    info!("Decoded {} card records", records.len());
    Ok(records)
}

/// Finds a column by trying each candidate name: exact match first, then
/// case-insensitive, then substring containment.
fn find_column(columns: &[&str], candidates: &[&str]) -> Option<usize> {
    for &candidate in candidates {
        if let Some(index) = columns.iter().position(|&column| column == candidate) {
            return Some(index);
        }
        if let Some(index) = columns.iter().position(|&column| column.eq_ignore_ascii_case(candidate)) {
            return Some(index);
        }
        let needle = candidate.to_lowercase();
        if let Some(index) = columns.iter().position(|&column| column.to_lowercase().contains(&needle)) {
            return Some(index);
        }
    }
    None
}

fn decode_row(row: &StringRecord, columns: &[&str], map: &ColumnMap) -> CardRecord {
    CardRecord {
        code: or_unknown(cell(row, map.code)),
        character: or_unknown(cell(row, map.character)),
        series: or_unknown(cell(row, map.series)),
        burn_value: map.burn.map(|index| parse_number(cell(row, index))).unwrap_or(0.0),
        edition: parse_count(exact_cell(row, columns, "edition")),
        quality: parse_count(exact_cell(row, columns, "quality")),
        dye: exact_cell(row, columns, "dye.name").to_string(),
        frame: exact_cell(row, columns, "frame").to_string(),
        tag: exact_cell(row, columns, "tag").to_string(),
        alias: exact_cell(row, columns, "alias").to_string(),
        wishlists: parse_count(exact_cell(row, columns, "wishlists")),
        worker: WorkerTraits {
            effort: parse_count(exact_cell(row, columns, "worker.effort")),
            style: exact_cell(row, columns, "worker.style").to_string(),
            purity: exact_cell(row, columns, "worker.purity").to_string(),
            grabber: exact_cell(row, columns, "worker.grabber").to_string(),
            dropper: exact_cell(row, columns, "worker.dropper").to_string(),
            quickness: exact_cell(row, columns, "worker.quickness").to_string(),
            toughness: exact_cell(row, columns, "worker.toughness").to_string(),
            vanity: exact_cell(row, columns, "worker.vanity").to_string(),
        },
    }
}

fn cell<'a>(row: &'a StringRecord, index: usize) -> &'a str {
    row.get(index).map(str::trim).unwrap_or("")
}

/// Pass-through columns are looked up by their exact export header only
fn exact_cell<'a>(row: &'a StringRecord, columns: &[&str], name: &str) -> &'a str {
    columns
        .iter()
        .position(|&column| column == name)
        .map(|index| cell(row, index))
        .unwrap_or("")
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        "Unknown".to_string()
    } else {
        value.to_string()
    }
}

fn parse_number(value: &str) -> f64 {
    value.parse().unwrap_or(0.0)
}

fn parse_count(value: &str) -> u32 {
    value.parse::<f64>().map(|number| number.max(0.0) as u32).unwrap_or(0)
}
