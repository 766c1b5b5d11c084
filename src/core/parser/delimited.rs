//! TSV / CSV reading
//!
//! Splits lines on a single delimiter. Quoting is off: quote characters are
//! literal and a field can never contain the delimiter. Rows keep whatever
//! field count their line had.

use log::warn;

use crate::core::grid::Grid;
use crate::utils::error::EditorResult;

/// Field delimiter of a delimited paste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Tab; fields kept verbatim
    Tab,
    /// Comma; whitespace around each field trimmed
    Comma,
}

impl Delimiter {
    pub fn byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
        }
    }

    fn trim(self) -> csv::Trim {
        match self {
            Delimiter::Tab => csv::Trim::None,
            Delimiter::Comma => csv::Trim::All,
        }
    }
}

/// Read delimited text into records, one per non-empty line
pub fn read_records(input: &str, delimiter: Delimiter) -> EditorResult<Vec<Vec<String>>> {
    let lines: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
    let text = lines.join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter.byte())
        .quoting(false)
        .flexible(true)
        .trim(delimiter.trim())
        .from_reader(text.as_bytes());

    let mut records = Vec::with_capacity(lines.len());
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok(records)
}

/// Parse delimited text into a grid: header row first, body rows after
pub fn parse_delimited(input: &str, delimiter: Delimiter) -> EditorResult<Grid> {
    let input = input.trim_matches(|c| c == '\n' || c == '\r');
    let records = read_records(input, delimiter)?;

    if let Some(first) = records.first() {
        let width = first.len();
        let ragged = records.iter().filter(|record| record.len() != width).count();
        if ragged > 0 {
            warn!(
                "{} of {} rows differ from the header's {} fields; keeping them as-is",
                ragged,
                records.len(),
                width
            );
        }
    }

    Ok(Grid::from_records(&records))
}
