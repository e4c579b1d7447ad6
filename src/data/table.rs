//! In-memory listings table backed by CSV
//!
//! Loads the whole file eagerly, keeps every column verbatim, and resolves
//! the positions of the fields the derivations read. Unknown columns pass
//! through untouched.

use crate::{Listing, ListingsError, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Columns the feature derivations require
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "number_of_reviews",
    "price",
    "minimum_nights",
    "availability_365",
    "room_type",
];

/// Resolved positions of the required columns within the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    number_of_reviews: usize,
    price: usize,
    minimum_nights: usize,
    availability_365: usize,
    room_type: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ListingsError::MissingColumn(name.to_string()))
        };
        Ok(ColumnIndex {
            number_of_reviews: find("number_of_reviews")?,
            price: find("price")?,
            minimum_nights: find("minimum_nights")?,
            availability_365: find("availability_365")?,
            room_type: find("room_type")?,
        })
    }
}

/// A row-oriented table of listings, fully resident in memory
#[derive(Debug, Clone)]
pub struct ListingTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
    columns: ColumnIndex,
}

impl ListingTable {
    /// Load a table from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a table from any reader producing CSV with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = ColumnIndex::resolve(&headers)?;

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            rows.push(record?);
        }

        Ok(ListingTable {
            headers,
            rows,
            columns,
        })
    }

    /// Write the table to a CSV file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(file)
    }

    /// Write the table to any writer
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Column names in file order
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Parse the typed fields of row `index`. Malformed values are fatal.
    pub fn listing(&self, index: usize) -> Result<Listing> {
        let row = self.rows.get(index).ok_or_else(|| {
            ListingsError::Parse(format!("Row index {} out of range", index))
        })?;

        Ok(Listing {
            number_of_reviews: parse_field(row, self.columns.number_of_reviews, index, "number_of_reviews")?,
            price: parse_field(row, self.columns.price, index, "price")?,
            minimum_nights: parse_field(row, self.columns.minimum_nights, index, "minimum_nights")?,
            availability_365: parse_field(row, self.columns.availability_365, index, "availability_365")?,
            room_type: row
                .get(self.columns.room_type)
                .unwrap_or_default()
                .to_string(),
        })
    }

    /// Append new columns. `values` holds one row of cell values per data row,
    /// each with one cell per name in `names`.
    pub fn append_columns(&mut self, names: &[&str], values: Vec<Vec<String>>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(ListingsError::Parse(format!(
                "Column value count {} does not match row count {}",
                values.len(),
                self.rows.len()
            )));
        }

        let mut headers = self.headers.clone();
        for name in names {
            headers.push_field(name);
        }
        self.headers = headers;

        for (row, cells) in self.rows.iter_mut().zip(values) {
            for cell in cells {
                row.push_field(&cell);
            }
        }

        Ok(())
    }
}

fn parse_field<T: std::str::FromStr>(
    row: &StringRecord,
    column: usize,
    index: usize,
    name: &str,
) -> Result<T> {
    let raw = row.get(column).unwrap_or_default();
    raw.parse().map_err(|_| {
        ListingsError::Parse(format!(
            "Row {}: invalid {} value '{}'",
            index + 2, // 1-based, after the header line
            name,
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,name,number_of_reviews,price,minimum_nights,availability_365,room_type
1,Cozy loft,12,150.0,2,300,Entire home/apt
2,Shared room,0,45.0,1,0,Shared room
3,Midtown suite,4,220.0,3,100,Private room
";

    #[test]
    fn test_load_preserves_rows_and_columns() {
        let table = ListingTable::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column_count(), 7);
        assert_eq!(table.headers().get(0), Some("id"));
    }

    #[test]
    fn test_typed_row_access() {
        let table = ListingTable::from_reader(SAMPLE.as_bytes()).unwrap();
        let listing = table.listing(0).unwrap();
        assert_eq!(listing.number_of_reviews, 12);
        assert_eq!(listing.price, 150.0);
        assert_eq!(listing.minimum_nights, 2);
        assert_eq!(listing.availability_365, 300);
        assert_eq!(listing.room_type, "Entire home/apt");
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "id,price\n1,100.0\n";
        let err = ListingTable::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            ListingsError::MissingColumn(name) => assert_eq!(name, "number_of_reviews"),
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn test_bad_value_is_fatal() {
        let csv = "\
number_of_reviews,price,minimum_nights,availability_365,room_type
not-a-number,100.0,1,10,Private room
";
        let table = ListingTable::from_reader(csv.as_bytes()).unwrap();
        let err = table.listing(0).unwrap_err();
        assert!(err.to_string().contains("number_of_reviews"));
    }

    #[test]
    fn test_append_columns() {
        let mut table = ListingTable::from_reader(SAMPLE.as_bytes()).unwrap();
        let values = vec![
            vec!["1".to_string()],
            vec!["0".to_string()],
            vec!["1".to_string()],
        ];
        table.append_columns(&["has_review"], values).unwrap();

        assert_eq!(table.column_count(), 8);
        assert_eq!(table.headers().get(7), Some("has_review"));

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().next().unwrap().ends_with("has_review"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_append_columns_length_mismatch() {
        let mut table = ListingTable::from_reader(SAMPLE.as_bytes()).unwrap();
        let result = table.append_columns(&["has_review"], vec![vec!["1".to_string()]]);
        assert!(result.is_err());
    }
}
