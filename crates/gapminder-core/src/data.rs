// File: crates/gapminder-core/src/data.rs
// Summary: Gapminder CSV loading into immutable rows, numeric field access and missing-value policy.

use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, VizError};

/// Marker the dataset uses for an absent value.
pub const MISSING_MARKER: &str = "NA";

/// Numeric columns the charts plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Fertility,
    LifeExpectancy,
    Population,
}

impl Field {
    /// Header name in the CSV.
    pub const fn column(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Fertility => "fertility",
            Field::LifeExpectancy => "life_expectancy",
            Field::Population => "population",
        }
    }
}

/// What to do with a numeric cell holding the missing marker (or nothing).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Leave the row out of the chart that needed the value.
    #[default]
    Skip,
    /// Plot the value as 0.0.
    Zero,
    /// Fail the build with [`VizError::MissingValue`].
    Error,
}

impl FromStr for MissingPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "zero" => Ok(Self::Zero),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown missing-value policy '{other}' (expected skip, zero or error)")),
        }
    }
}

/// True for the `NA` marker and for blank cells.
pub fn is_missing(raw: &str) -> bool {
    let s = raw.trim();
    s.is_empty() || s == MISSING_MARKER
}

/// One country-year record, kept as the raw strings read from the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub country: String,
    pub year: String,
    pub fertility: String,
    pub life_expectancy: String,
    pub population: String,
    /// 1-based line in the source file (header is line 1).
    pub line: u64,
}

impl Row {
    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::Year => &self.year,
            Field::Fertility => &self.fertility,
            Field::LifeExpectancy => &self.life_expectancy,
            Field::Population => &self.population,
        }
    }

    /// Parse a numeric field. `Ok(None)` means the cell is missing.
    pub fn value(&self, field: Field) -> Result<Option<f64>> {
        let raw = self.raw(field);
        if is_missing(raw) {
            return Ok(None);
        }
        let s = raw.trim();
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(VizError::InvalidNumber {
                line: self.line,
                column: field.column(),
                value: s.to_string(),
            }),
        }
    }

    /// Parse a numeric field and apply `policy` to missing cells.
    /// `Ok(None)` means the row should be skipped.
    pub fn resolve(&self, field: Field, policy: MissingPolicy) -> Result<Option<f64>> {
        match (self.value(field)?, policy) {
            (Some(v), _) => Ok(Some(v)),
            (None, MissingPolicy::Skip) => Ok(None),
            (None, MissingPolicy::Zero) => Ok(Some(0.0)),
            (None, MissingPolicy::Error) => Err(VizError::MissingValue { line: self.line, column: field.column() }),
        }
    }
}

/// The loaded row set. Never mutated after construction; filters hand out borrowed views.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Load a Gapminder CSV from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let ds = Self::from_reader(file)?;
        tracing::info!(path = %path.display(), rows = ds.len(), "loaded dataset");
        Ok(ds)
    }

    /// Load from any reader. Headers are matched case-insensitively, in any order;
    /// extra columns are ignored.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        tracing::debug!(?headers, "csv headers");

        let idx = |name: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(VizError::MissingColumn { column: name })
        };

        let i_country = idx("country")?;
        let i_year = idx(Field::Year.column())?;
        let i_fert = idx(Field::Fertility.column())?;
        let i_life = idx(Field::LifeExpectancy.column())?;
        let i_pop = idx(Field::Population.column())?;

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            // Short records read as missing cells rather than failing the load.
            let cell = |i: usize| rec.get(i).unwrap_or("").to_string();
            rows.push(Row {
                country: cell(i_country),
                year: cell(i_year),
                fertility: cell(i_fert),
                life_expectancy: cell(i_life),
                population: cell(i_pop),
                line,
            });
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose `year` cell equals `year` exactly, in file order.
    pub fn for_year(&self, year: &str) -> Vec<&Row> {
        self.rows.iter().filter(|r| r.year == year).collect()
    }

    /// Rows for one country, in file order.
    pub fn for_country(&self, country: &str) -> Vec<&Row> {
        self.rows.iter().filter(|r| r.country == country).collect()
    }
}
