//! Dataset Loader
//!
//! Reads a city's trip CSV, validates every row, derives the calendar
//! fields and applies the month/day filters. A single bad row fails the
//! whole load; an empty result after filtering is not an error.

use crate::error::LoadError;
use crate::filters::{City, DayFilter, FilterParams, MonthFilter};
use crate::models::{RawTrip, RecordSet, Schema, TripRecord, REQUIRED_COLUMNS};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

/// Resolves cities to dataset files under a data directory.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    data_dir: PathBuf,
}

impl DatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn dataset_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Load `city` and keep only the rows matching `month` and `day`.
    pub fn load(
        &self,
        city: City,
        month: MonthFilter,
        day: DayFilter,
    ) -> Result<RecordSet, LoadError> {
        let all = self.load_city(city)?;
        let total = all.len();
        let filtered = all.into_filtered(month, day);

        info!(
            city = %city,
            month = %month,
            day = %day,
            total,
            retained = filtered.len(),
            "Loaded trip data"
        );

        Ok(filtered)
    }

    pub fn load_params(&self, params: &FilterParams) -> Result<RecordSet, LoadError> {
        self.load(params.city, params.month, params.day)
    }

    /// Every row of `city`, unfiltered.
    pub fn load_city(&self, city: City) -> Result<RecordSet, LoadError> {
        let path = self.dataset_path(city);
        debug!(path = %path.display(), "Opening dataset");

        let file = File::open(&path).map_err(|source| LoadError::Open {
            path: path.clone(),
            source,
        })?;

        read_records(file)
    }
}

/// Parse trip CSV data from any reader.
pub fn read_records<R: Read>(reader: R) -> Result<RecordSet, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(LoadError::MissingColumn(*missing));
    }

    let schema = Schema::from_headers(&headers);
    debug!(
        has_gender = schema.has_gender,
        has_birth_year = schema.has_birth_year,
        "Detected dataset schema"
    );

    let mut records = Vec::new();
    for (index, row) in rdr.deserialize::<RawTrip>().enumerate() {
        records.push(TripRecord::from_raw(row?, index + 1)?);
    }

    Ok(RecordSet::new(schema, records))
}
