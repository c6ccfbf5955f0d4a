use crate::error::StoreError;
use crate::memory::MemoryTable;
use crate::traits::TabularStore;
use sheetfill_common::CellValue;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CsvTypeInference {
    /// Do not infer: treat all non-empty fields as text.
    Off,
    /// Infer booleans + numbers when unambiguous.
    #[default]
    Basic,
    /// Like `Basic`, plus conservative date/date-time parsing.
    BasicWithDates,
}

#[derive(Clone, Debug)]
pub struct CsvReadOptions {
    /// Field delimiter as a single byte. Use `b'\t'` for TSV.
    pub delimiter: u8,
    pub type_inference: CsvTypeInference,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            type_inference: CsvTypeInference::Basic,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CsvWriteOptions {
    pub delimiter: u8,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// CSV-backed tabular store.
///
/// Semantics:
/// - The first record is the header; its fields become the column names.
/// - Header fields are never type-inferred.
/// - UTF-8 only. Formulas/styles are not a concern at this layer.
/// - `save` rewrites the file the store was opened from; `save_to` writes an
///   explicit destination without changing the backing path.
pub struct CsvStore {
    table: MemoryTable,
    path: Option<PathBuf>,
    read_options: CsvReadOptions,
    write_options: CsvWriteOptions,
}

impl CsvStore {
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::open_path_with_options(path, CsvReadOptions::default())
    }

    pub fn open_path_with_options<P: AsRef<Path>>(
        path: P,
        read_options: CsvReadOptions,
    ) -> Result<Self, StoreError> {
        let file = File::open(path.as_ref())?;
        let mut store = Self::from_reader(Box::new(BufReader::new(file)), read_options)?;
        store.path = Some(path.as_ref().to_path_buf());
        Ok(store)
    }

    pub fn open_bytes(bytes: Vec<u8>) -> Result<Self, StoreError> {
        Self::open_bytes_with_options(bytes, CsvReadOptions::default())
    }

    pub fn open_bytes_with_options(
        bytes: Vec<u8>,
        read_options: CsvReadOptions,
    ) -> Result<Self, StoreError> {
        Self::from_reader(Box::new(std::io::Cursor::new(bytes)), read_options)
    }

    fn from_reader(
        reader: Box<dyn Read>,
        read_options: CsvReadOptions,
    ) -> Result<Self, StoreError> {
        let mut rb = csv::ReaderBuilder::new();
        rb.delimiter(read_options.delimiter)
            .has_headers(true)
            // Allow ragged rows; short records pad with empty cells.
            .flexible(true);
        let mut rdr = rb.from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut table = MemoryTable::new();
        let mut names: Vec<String> = Vec::with_capacity(headers.len());
        for name in headers.iter() {
            table.push_column(name, Vec::new());
            names.push(name.to_string());
        }

        for rec in rdr.records() {
            let rec = rec?;
            // Records longer than the header get synthesized overflow
            // columns; fields are never dropped.
            while names.len() < rec.len() {
                let name = overflow_name(&names);
                table.push_column(name.clone(), Vec::new());
                names.push(name);
            }
            let row: Vec<CellValue> = rec
                .iter()
                .map(|field| infer_field(field, read_options.type_inference))
                .collect();
            table.push_row(row);
        }

        Ok(Self {
            table,
            path: None,
            read_options,
            write_options: CsvWriteOptions::default(),
        })
    }

    pub fn read_options(&self) -> &CsvReadOptions {
        &self.read_options
    }

    pub fn set_write_options(&mut self, opts: CsvWriteOptions) {
        self.write_options = opts;
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let mut file = File::create(path.as_ref())?;
        self.write_csv(&mut file)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        let mut buf: Vec<u8> = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(buf)
    }

    fn write_csv<W: Write>(&self, writer: &mut W) -> Result<(), StoreError> {
        let mut wb = csv::WriterBuilder::new();
        wb.delimiter(self.write_options.delimiter);
        let mut wtr = wb.from_writer(writer);

        let names = self.table.column_names();
        wtr.write_record(&names)?;

        for row in 0..self.table.row_count() {
            let record: Vec<String> = names
                .iter()
                .map(|name| self.table.cell(name, row).render())
                .collect();
            wtr.write_record(record)?;
        }
        wtr.flush().map_err(|e| StoreError::from_backend("csv", e))?;
        Ok(())
    }
}

impl TabularStore for CsvStore {
    fn is_open(&self) -> bool {
        self.table.is_open()
    }

    fn column_names(&self) -> Vec<String> {
        self.table.column_names()
    }

    fn has_column(&self, name: &str) -> bool {
        self.table.has_column(name)
    }

    fn row_count(&self) -> u32 {
        self.table.row_count()
    }

    fn cell(&self, column: &str, row: u32) -> CellValue {
        self.table.cell(column, row)
    }

    fn set_cell(&mut self, column: &str, row: u32, value: CellValue) {
        self.table.set_cell(column, row, value);
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let Some(path) = self.path.clone() else {
            return Err(StoreError::NoBackingPath);
        };
        self.save_to(path)
    }
}

fn overflow_name(taken: &[String]) -> String {
    let mut n = taken.len() + 1;
    loop {
        let candidate = format!("Field{n}");
        if !taken.iter().any(|t| t == &candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn infer_field(field: &str, mode: CsvTypeInference) -> CellValue {
    if field.is_empty() {
        return CellValue::Empty;
    }
    if mode == CsvTypeInference::Off {
        return CellValue::Text(field.to_string());
    }

    if let Some(b) = parse_bool(field) {
        return CellValue::Boolean(b);
    }
    if let Some(i) = parse_unambiguous_i64(field) {
        return CellValue::Int(i);
    }
    if let Some(n) = parse_unambiguous_f64(field) {
        return CellValue::Number(n);
    }
    if mode == CsvTypeInference::BasicWithDates {
        if let Some(d) = parse_date(field) {
            return CellValue::Date(d);
        }
        if let Some(dt) = parse_datetime(field) {
            return CellValue::DateTime(dt);
        }
    }
    CellValue::Text(field.to_string())
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_unambiguous_i64(s: &str) -> Option<i64> {
    // Conservative: a leading '+' or padding zeros would not survive a save
    // round-trip, so those stay text.
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

fn parse_unambiguous_f64(s: &str) -> Option<f64> {
    // Only consider float if it actually looks like one ('.' or exponent).
    if !(s.contains('.') || s.contains('e') || s.contains('E')) {
        return None;
    }
    if s.starts_with('+') {
        return None;
    }
    let mantissa = s.strip_prefix('-').unwrap_or(s);
    if mantissa.len() > 1 && mantissa.starts_with('0') && !mantissa.starts_with("0.") {
        return None;
    }
    let n: f64 = s.parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(n)
}

fn parse_date(s: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_datetime(s: &str) -> Option<chrono::NaiveDateTime> {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
