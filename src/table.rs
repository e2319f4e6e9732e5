//! Reading the tab-separated input table. Row 0 is the header, whose field in
//! the configured column names the output, and every later row carries one
//! SMILES string in that same column.

use std::{fs::File, io, ops::Range, path::Path};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use log::trace;

use crate::error::Error;

/// A single row selected for conversion
#[derive(Clone, Debug, PartialEq)]
pub struct WorkRow {
    /// index of the row in the file, counting the header as 0
    pub index: usize,

    /// the SMILES string to convert
    pub structure: String,
}

/// An input table with its header already consumed.
pub struct Table<R> {
    name: String,
    column: usize,
    records: StringRecordsIntoIter<R>,
}

impl Table<File> {
    /// open the table at `path`. the file stays open until the [Table] (or
    /// the iterator returned by [Table::work_rows]) is dropped
    pub fn open(path: impl AsRef<Path>, column: usize) -> Result<Self, Error> {
        let path = path.as_ref();
        let reader = builder().from_path(path).map_err(|source| Error::Open {
            path: path.to_owned(),
            source,
        })?;
        Self::new(reader, column)
    }
}

impl<R: io::Read> Table<R> {
    pub fn from_reader(rdr: R, column: usize) -> Result<Self, Error> {
        Self::new(builder().from_reader(rdr), column)
    }

    fn new(reader: csv::Reader<R>, column: usize) -> Result<Self, Error> {
        let mut records = reader.into_records();
        let header = records.next().ok_or(Error::NoHeader)??;
        let name = field(&header, 0, column)?;
        if name.is_empty() {
            return Err(Error::EmptyName { column });
        }
        trace!("header has {} fields, output name {name}", header.len());
        Ok(Self {
            name: name.to_owned(),
            column,
            records,
        })
    }

    /// the header field naming the output directory and file prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// yield the rows whose file index lies in `rows`, in file order. the
    /// header is row 0 and is never yielded. rows before the range are still
    /// parsed, so a malformed row anywhere up to `rows.end` is an error
    pub fn work_rows(
        self,
        rows: Range<usize>,
    ) -> impl Iterator<Item = Result<WorkRow, Error>> {
        let Range { start, end } = rows;
        let column = self.column;
        self.records
            .enumerate()
            .map(|(i, rec)| (i + 1, rec))
            .take_while(move |(i, _)| *i < end)
            .filter_map(move |(index, rec)| {
                let rec = match rec {
                    Ok(rec) => rec,
                    Err(e) => return Some(Err(Error::from(e))),
                };
                if index < start {
                    return None;
                }
                Some(field(&rec, index, column).map(|s| WorkRow {
                    index,
                    structure: s.to_owned(),
                }))
            })
    }
}

fn builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.delimiter(b'\t').has_headers(false).flexible(true);
    b
}

fn field(rec: &StringRecord, row: usize, column: usize) -> Result<&str, Error> {
    rec.get(column).ok_or(Error::MissingColumn {
        row,
        column,
        len: rec.len(),
    })
}
