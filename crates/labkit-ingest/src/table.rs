//! Parsed air-quality table held by the cache.
//!
//! The CSV is read with Polars, projecting only the three columns the
//! dataset keys refer to. State and county names repeat heavily, so they are
//! interned into [`CategoricalColumn`]s; AQI is kept as `f32`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use polars::prelude::{
    Column, CsvReadOptions, DataFrame, DataType, Field, PlSmallStr, Schema, SerReader,
};

use crate::error::{IngestError, Result};
use crate::key::{ColumnValue, DatasetKey};

/// Dictionary-encoded string column.
#[derive(Debug, Clone, Default)]
pub struct CategoricalColumn {
    categories: Vec<Arc<str>>,
    codes: Vec<Option<u32>>,
}

impl CategoricalColumn {
    /// Interns `values`, preserving row order.
    pub fn from_values<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let mut lookup: HashMap<Arc<str>, u32> = HashMap::new();
        let mut column = Self::default();

        for value in values {
            let code = value.map(|v| {
                if let Some(&code) = lookup.get(v) {
                    return code;
                }
                let code = column.categories.len() as u32;
                let interned: Arc<str> = Arc::from(v);
                column.categories.push(Arc::clone(&interned));
                lookup.insert(interned, code);
                code
            });
            column.codes.push(code);
        }

        column
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Distinct values in first-seen order.
    pub fn categories(&self) -> &[Arc<str>] {
        &self.categories
    }

    pub fn get(&self, row: usize) -> Option<&str> {
        let code = (*self.codes.get(row)?)?;
        self.categories.get(code as usize).map(AsRef::as_ref)
    }

    fn materialize(&self) -> Vec<ColumnValue> {
        self.codes
            .iter()
            .map(|code| match code {
                Some(code) => ColumnValue::Text(self.categories[*code as usize].to_string()),
                None => ColumnValue::Missing,
            })
            .collect()
    }
}

/// The three dataset columns, equal length, in source row order.
#[derive(Debug, Clone)]
pub struct AirQualityTable {
    state: CategoricalColumn,
    county: CategoricalColumn,
    aqi: Vec<Option<f32>>,
}

impl AirQualityTable {
    /// Builds the table from a DataFrame holding the projected columns.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let state = categorical_column(df, DatasetKey::State.column_name())?;
        let county = categorical_column(df, DatasetKey::County.column_name())?;

        let aqi_series = column(df, DatasetKey::Aqi.column_name())?
            .cast(&DataType::Float32)?
            .take_materialized_series();
        let aqi: Vec<Option<f32>> = aqi_series.f32()?.iter().collect();

        Ok(Self { state, county, aqi })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.aqi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aqi.is_empty()
    }

    pub fn state(&self) -> &CategoricalColumn {
        &self.state
    }

    pub fn county(&self) -> &CategoricalColumn {
        &self.county
    }

    pub fn aqi(&self) -> &[Option<f32>] {
        &self.aqi
    }

    /// Materializes an owned copy of one column.
    pub fn column_values(&self, key: DatasetKey) -> Vec<ColumnValue> {
        match key {
            DatasetKey::State => self.state.materialize(),
            DatasetKey::County => self.county.materialize(),
            DatasetKey::Aqi => self
                .aqi
                .iter()
                .map(|v| v.map_or(ColumnValue::Missing, ColumnValue::Number))
                .collect(),
        }
    }
}

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| IngestError::ColumnNotFound {
        column: name.to_string(),
    })
}

fn categorical_column(df: &DataFrame, name: &str) -> Result<CategoricalColumn> {
    let series = column(df, name)?
        .cast(&DataType::String)?
        .take_materialized_series();
    Ok(CategoricalColumn::from_values(series.str()?.iter()))
}

/// Reads the dataset at `path` into an [`AirQualityTable`].
///
/// Only `state_name`, `county_name` and `aqi` are read; `aqi` is parsed as
/// `Float32`. A file that parses to zero rows is an error.
pub fn read_air_quality_table(path: &Path) -> Result<AirQualityTable> {
    let projection: Arc<[PlSmallStr]> = DatasetKey::ALL
        .iter()
        .map(|key| PlSmallStr::from(key.column_name()))
        .collect();
    let overwrite = Schema::from_iter([Field::new(
        PlSmallStr::from(DatasetKey::Aqi.column_name()),
        DataType::Float32,
    )]);

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_columns(Some(projection))
        .with_schema_overwrite(Some(Arc::new(overwrite)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    AirQualityTable::from_dataframe(&df)
}
