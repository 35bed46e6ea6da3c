//! Loading records and postal code tables.
//!
//! Records are JSON arrays; postal codes are CSV with the header
//! `postal_code,city,region`. A small sample of both ships with the binary.

use std::io::Read;
use std::path::Path;

use roster_seeker::{Location, PostalDirectory, Record};
use serde::Deserialize;

use crate::error::{Result, RosterError};

const BUNDLED_RECORDS: &str = include_str!("../data/records.json");
const BUNDLED_POSTAL_CODES: &str = include_str!("../data/postal_codes.csv");

/// A record set with the postal table used to locate it.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub directory: PostalDirectory,
}

#[derive(Debug, Deserialize)]
struct PostalRow {
    postal_code: String,
    city: String,
    region: String,
}

impl Dataset {
    /// The sample dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Ok(Dataset {
            records: parse_records(BUNDLED_RECORDS.as_bytes())?,
            directory: parse_postal_codes(BUNDLED_POSTAL_CODES.as_bytes())?,
        })
    }

    /// Loads each part from its file, falling back to the bundled sample.
    pub fn load(records: Option<&Path>, postal_codes: Option<&Path>) -> Result<Self> {
        let records = match records {
            Some(path) => parse_records(open(path)?)?,
            None => parse_records(BUNDLED_RECORDS.as_bytes())?,
        };
        let directory = match postal_codes {
            Some(path) => parse_postal_codes(open(path)?)?,
            None => parse_postal_codes(BUNDLED_POSTAL_CODES.as_bytes())?,
        };

        tracing::info!(
            records = records.len(),
            postal_codes = directory.len(),
            "loaded dataset"
        );
        Ok(Dataset { records, directory })
    }
}

fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a JSON array of records.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parses a `postal_code,city,region` CSV table.
pub fn parse_postal_codes<R: Read>(reader: R) -> Result<PostalDirectory> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut directory = PostalDirectory::new();
    for row in csv.deserialize() {
        let row: PostalRow = row?;
        directory.insert(row.postal_code, Location::new(row.city, row.region));
    }
    Ok(directory)
}
