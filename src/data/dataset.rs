//! Film Dataset Module
//! Loads the film table from CSV and answers row/column queries using Polars.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use polars::prelude::*;
use thiserror::Error;

/// Column names of the film table.
pub const COL_TITLE: &str = "Title";
pub const COL_GENRE: &str = "Genre";
pub const COL_PREMIERE: &str = "Premiere";
pub const COL_RUNTIME: &str = "Runtime";
pub const COL_IMDB_SCORE: &str = "IMDB Score";
pub const COL_LANGUAGE: &str = "Language";

/// Premiere values are written like "August 5, 2019".
const PREMIERE_FORMAT: &str = "%B %d, %Y";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: PolarsError,
    },
}

/// The film table, loaded once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct Dataset {
    df: DataFrame,
}

impl Dataset {
    /// Load the film table from a CSV file.
    ///
    /// The Premiere column is parsed into a date column on the way in;
    /// values that do not match the expected format become null.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        // Use lazy evaluation so schema inference and date parsing run in one pass
        let parse_premiere = col(COL_PREMIERE).str().to_date(StrptimeOptions {
            format: Some(PREMIERE_FORMAT.into()),
            strict: false,
            ..Default::default()
        });

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()
            .and_then(|lf| lf.with_column(parse_premiere).collect())
            .map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self { df })
    }

    #[cfg(test)]
    pub(crate) fn from_frame(df: DataFrame) -> Self {
        Self { df }
    }

    /// Get a reference to the full table.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Get list of column names in table order.
    pub fn columns(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get the number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    /// Get a single-column table holding the distinct values of `column`,
    /// keeping the order in which each value first appears. Nulls collapse
    /// into one entry like any other value.
    pub fn unique_column(&self, column: &str) -> PolarsResult<DataFrame> {
        let col = self.df.column(column)?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut keep: Vec<IdxSize> = Vec::new();
        for i in 0..col.len() {
            let key = col.get(i)?.to_string();
            if seen.insert(key) {
                keep.push(i as IdxSize);
            }
        }

        self.df
            .select([column])?
            .take(&IdxCa::from_vec("keep".into(), keep))
    }

    /// Get the rows at the given zero-based positions, in the given order.
    /// Positions past the end of the table are an error.
    pub fn rows_at(&self, indices: &[IdxSize]) -> PolarsResult<DataFrame> {
        self.df
            .take(&IdxCa::from_vec("rows".into(), indices.to_vec()))
    }
}

/// Convert a Date value (days since the Unix epoch) back into a calendar date.
pub(crate) fn date_from_days(days: i32) -> Option<NaiveDate> {
    chrono::DateTime::from_timestamp(i64::from(days) * 86_400, 0).map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_csv() -> &'static str {
        "Title,Genre,Premiere,Runtime,IMDB Score,Language\n\
         Enter the Anime,Documentary,\"August 5, 2019\",58,2.5,English/Japanese\n\
         Dark Forces,Thriller,\"August 21, 2020\",81,2.6,Spanish\n\
         The App,Science fiction/Drama,\"December 26, 2019\",79,2.6,Italian\n\
         The Open House,Horror thriller,\"January 19, 2018\",94,3.2,English\n\
         Untitled Sequel,Drama,sometime in 2019,90,3.0,English\n"
    }

    fn load_sample() -> Dataset {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_csv().as_bytes()).unwrap();
        Dataset::load(file.path()).unwrap()
    }

    #[test]
    fn load_parses_premiere_as_date() {
        let dataset = load_sample();
        assert_eq!(dataset.row_count(), 5);
        assert_eq!(
            dataset.frame().column(COL_PREMIERE).unwrap().dtype(),
            &DataType::Date
        );

        let first = dataset.frame().column(COL_PREMIERE).unwrap().get(0).unwrap();
        let expected = NaiveDate::from_ymd_opt(2019, 8, 5).unwrap();
        assert_eq!(first, AnyValue::Date((expected - epoch()).num_days() as i32));
    }

    #[test]
    fn load_keeps_unparseable_premiere_as_null() {
        let dataset = load_sample();
        let premiere = dataset.frame().column(COL_PREMIERE).unwrap();
        // the malformed "sometime in 2019" cell must not fail the load
        assert_eq!(premiere.dtype(), &DataType::Date);
        assert!(premiere.get(4).unwrap().is_null());
        assert_eq!(premiere.null_count(), 1);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = Dataset::load(Path::new("no_such_file.csv")).unwrap_err();
        assert!(err.to_string().contains("no_such_file.csv"));
    }

    #[test]
    fn columns_keep_table_order() {
        let dataset = load_sample();
        assert_eq!(
            dataset.columns(),
            vec![
                COL_TITLE,
                COL_GENRE,
                COL_PREMIERE,
                COL_RUNTIME,
                COL_IMDB_SCORE,
                COL_LANGUAGE
            ]
        );
    }

    #[test]
    fn unique_column_keeps_first_seen_order() {
        let df = df!(
            "Genre" => ["Documentary", "Thriller", "Documentary", "Drama", "Thriller"]
        )
        .unwrap();
        let dataset = Dataset::from_frame(df);

        let unique = dataset.unique_column("Genre").unwrap();
        let values: Vec<String> = (0..unique.height())
            .map(|i| {
                unique.get_columns()[0]
                    .get(i)
                    .unwrap()
                    .to_string()
                    .trim_matches('"')
                    .to_string()
            })
            .collect();
        assert_eq!(values, vec!["Documentary", "Thriller", "Drama"]);
    }

    #[test]
    fn unique_column_unknown_name_is_an_error() {
        let dataset = load_sample();
        assert!(dataset.unique_column("Director").is_err());
    }

    #[test]
    fn rows_at_preserves_request_order_and_duplicates() {
        let dataset = load_sample();
        let rows = dataset.rows_at(&[2, 0, 2]).unwrap();
        assert_eq!(rows.height(), 3);

        let titles: Vec<String> = (0..rows.height())
            .map(|i| {
                rows.column(COL_TITLE)
                    .unwrap()
                    .get(i)
                    .unwrap()
                    .to_string()
                    .trim_matches('"')
                    .to_string()
            })
            .collect();
        assert_eq!(titles, vec!["The App", "Enter the Anime", "The App"]);
    }

    #[test]
    fn rows_at_out_of_bounds_is_an_error() {
        let dataset = load_sample();
        assert!(dataset.rows_at(&[99]).is_err());
    }

    #[test]
    fn date_from_days_round_trips_the_epoch_offset() {
        let date = NaiveDate::from_ymd_opt(2020, 8, 21).unwrap();
        let days = (date - epoch()).num_days() as i32;
        assert_eq!(date_from_days(days), Some(date));
    }

    fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
    }
}
