// ============================================================
// ROW TOKENIZER
// ============================================================
// Split raw delimited text into header-keyed rows

use csv::{ErrorKind, ReaderBuilder, Trim, WriterBuilder};
use indexmap::IndexMap;

use crate::domain::csv::{ImportConfig, RawRow};
use crate::domain::error::{ImportError, Result};

/// Tokenize delimited text into an ordered sequence of rows.
///
/// The first record is the header; header names and every cell are
/// trimmed before use. Rows whose cells are all empty after trimming
/// are dropped. Tokenization is all-or-nothing: a structural failure
/// (cell count mismatch against the header, quoting the reader cannot
/// reconcile) aborts the whole call with the offending row number,
/// 1-based with the header counted as row 1.
pub fn tokenize(text: &str, config: &ImportConfig) -> Result<Vec<RawRow>> {
    if text.trim().is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter as u8)
        .trim(Trim::All)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| malformed(1, &e))?
        .clone();

    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let row_number = index + 2;
        let record = result.map_err(|e| malformed(row_number, &e))?;

        let cells: IndexMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();

        let row = RawRow::new(row_number, cells);
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Serialize rows back to delimited text, using the first row's header
/// order. Tokenizing the output again yields the same row values.
pub fn serialize_rows(rows: &[RawRow], config: &ImportConfig) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(config.delimiter as u8)
        .from_writer(Vec::new());

    if let Some(first) = rows.first() {
        writer
            .write_record(first.columns())
            .map_err(|e| ImportError::IoError(e.to_string()))?;

        for row in rows {
            writer
                .write_record(first.columns().map(|column| row.value(column)))
                .map_err(|e| ImportError::IoError(e.to_string()))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ImportError::IoError(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| ImportError::ParseError(e.to_string()))
}

/// Detect the delimiter of a content sample (comma, semicolon, tab,
/// pipe), scoring each candidate by per-line count consistency.
pub fn detect_delimiter(sample: &str) -> char {
    let candidates = [',', ';', '\t', '|'];
    let lines: Vec<&str> = sample.lines().take(10).collect();

    let mut best_delimiter = ',';
    let mut best_score = 0.0f32;

    for &delimiter in &candidates {
        if lines.is_empty() {
            continue;
        }

        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.chars().filter(|&c| c == delimiter).count())
            .collect();

        let avg = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
        let variance = counts
            .iter()
            .map(|&count| (count as f32 - avg).powi(2))
            .sum::<f32>()
            / counts.len() as f32;

        let score = avg / (1.0 + variance.sqrt());

        if score > best_score {
            best_score = score;
            best_delimiter = delimiter;
        }
    }

    best_delimiter
}

fn malformed(row: usize, err: &csv::Error) -> ImportError {
    let message = match err.kind() {
        ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("expected {} cells, found {}", expected_len, len)
        }
        _ => err.to_string(),
    };
    ImportError::MalformedRow { row, message }
}
