// File: crates/ratings-core/src/data.rs
// Summary: Row/Dataset model and the CSV loader that produces them.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::types::REQUIRED_FIELDS;

/// One observation (a season). Fields stay textual; numeric access parses on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl Row {
    /// Raw text of `field`, if the column exists.
    pub fn get(&self, field: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == field)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Iterate `(name, value)` pairs in source column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(String::as_str).zip(self.values.iter().map(String::as_str))
    }
}

/// Ordered, immutable collection of rows sharing one header list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset from in-memory records. Every record must have one value per header.
    pub fn from_records<H, R, V>(headers: H, records: R) -> Result<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = V>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let shared: Arc<[String]> = headers.clone().into();
        let mut rows = Vec::new();
        for (i, rec) in records.into_iter().enumerate() {
            let values: Vec<String> = rec.into_iter().map(Into::into).collect();
            if values.len() != headers.len() {
                return Err(ChartError::RaggedRecord { row: i, expected: headers.len(), found: values.len() });
            }
            rows.push(Row { headers: Arc::clone(&shared), values });
        }
        Ok(Self { headers, rows })
    }

    /// Parse delimited text with a required header row. Column order is irrelevant;
    /// the six season columns must be present.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::Headers).from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        for want in REQUIRED_FIELDS {
            if !headers.iter().any(|h| h == want) {
                return Err(ChartError::MissingColumn(want.to_string()));
            }
        }

        let shared: Arc<[String]> = headers.clone().into();
        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let values = rec.iter().map(str::to_string).collect();
            rows.push(Row { headers: Arc::clone(&shared), values });
        }
        debug!(rows = rows.len(), columns = headers.len(), "loaded dataset");
        Ok(Self { headers, rows })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn rows(&self) -> &[Row] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Extracts a numeric value from a row. `index` is the row's position, used in errors.
pub trait NumericField {
    fn name(&self) -> &str;
    fn value(&self, row: &Row, index: usize) -> Result<f64>;
}

/// Selects a column by header name and parses it as a decimal number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column(pub String);

impl Column {
    pub fn new(name: impl Into<String>) -> Self { Self(name.into()) }
}

impl NumericField for Column {
    fn name(&self) -> &str { &self.0 }

    fn value(&self, row: &Row, index: usize) -> Result<f64> {
        let raw = row.get(&self.0).unwrap_or("");
        parse_decimal(raw).ok_or_else(|| ChartError::InvalidData {
            row: index,
            field: self.0.clone(),
            value: raw.to_string(),
        })
    }
}

impl<T: NumericField + ?Sized> NumericField for &T {
    fn name(&self) -> &str { (**self).name() }
    fn value(&self, row: &Row, index: usize) -> Result<f64> { (**self).value(row, index) }
}

/// Standard decimal parsing after trimming whitespace. Rejects NaN/infinite results.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() { return None; }
    let v = t.parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}

/// Collect every value of `field`, failing on the first row that does not parse.
pub fn column_values(dataset: &Dataset, field: &dyn NumericField) -> Result<Vec<f64>> {
    dataset.rows().iter().enumerate().map(|(i, r)| field.value(r, i)).collect()
}

/// Arithmetic mean of `field` over all rows.
pub fn mean(dataset: &Dataset, field: &dyn NumericField) -> Result<f64> {
    if dataset.is_empty() { return Err(ChartError::EmptyDataset); }
    let values = column_values(dataset, field)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}
