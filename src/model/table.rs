use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::record::ImageRecord;

/// Opaque identifier the table assigns to a row on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Filename,
    Dimensions,
    Resolution,
    ColorDepth,
    Compression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Rows on display plus the row-to-path mapping used to resolve activations.
/// Every held row has exactly one entry in the mapping; both are cleared
/// together at the start of each scan.
#[derive(Debug, Default)]
pub struct ResultsTable {
    rows: Vec<(RowId, ImageRecord)>,
    paths: HashMap<RowId, PathBuf>,
    next_id: u64,
}

impl ResultsTable {
    pub fn clear(&mut self) {
        // next_id keeps counting so an id from a previous scan can never
        // alias a freshly inserted row.
        self.rows.clear();
        self.paths.clear();
    }

    pub fn insert(&mut self, record: ImageRecord) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.paths.insert(id, record.source_path.clone());
        self.rows.push((id, record));
        id
    }

    pub fn path_for(&self, id: RowId) -> Option<&Path> {
        self.paths.get(&id).map(PathBuf::as_path)
    }

    pub fn rows(&self) -> impl Iterator<Item = (RowId, &ImageRecord)> {
        self.rows.iter().map(|(id, record)| (*id, record))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort(&mut self, column: SortColumn, order: SortOrder) {
        self.rows.sort_by(|(_, a), (_, b)| {
            let ordering = match column {
                SortColumn::Filename => a
                    .filename
                    .to_lowercase()
                    .cmp(&b.filename.to_lowercase()),
                SortColumn::Dimensions => pixel_count(a.dimensions).cmp(&pixel_count(b.dimensions)),
                SortColumn::Resolution => a.resolution.0.total_cmp(&b.resolution.0),
                SortColumn::ColorDepth => a.color_depth.cmp(&b.color_depth),
                SortColumn::Compression => a.compression.cmp(&b.compression),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }
}

fn pixel_count((width, height): (u32, u32)) -> u64 {
    u64::from(width) * u64::from(height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, dimensions: (u32, u32)) -> ImageRecord {
        ImageRecord {
            filename: name.to_string(),
            dimensions,
            resolution: (0.0, 0.0),
            color_depth: Some(24),
            compression: None,
            source_path: PathBuf::from("/pics").join(name),
        }
    }

    #[test]
    fn insert_records_the_path_mapping() {
        let mut table = ResultsTable::default();
        let id = table.insert(record("a.png", (10, 10)));

        assert_eq!(table.len(), 1);
        assert_eq!(table.path_for(id), Some(Path::new("/pics/a.png")));
    }

    #[test]
    fn clear_empties_rows_and_mapping_in_lockstep() {
        let mut table = ResultsTable::default();
        let id = table.insert(record("a.png", (10, 10)));
        table.insert(record("b.png", (10, 10)));

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.path_for(id), None);
    }

    #[test]
    fn row_ids_are_not_reused_across_scans() {
        let mut table = ResultsTable::default();
        let stale = table.insert(record("old.png", (10, 10)));

        table.clear();
        let fresh = table.insert(record("new.png", (10, 10)));

        assert_ne!(stale, fresh);
        assert_eq!(table.path_for(stale), None);
        assert_eq!(table.path_for(fresh), Some(Path::new("/pics/new.png")));
    }

    #[test]
    fn sort_by_filename_is_case_insensitive() {
        let mut table = ResultsTable::default();
        table.insert(record("Beta.png", (10, 10)));
        table.insert(record("alpha.png", (10, 10)));

        table.sort(SortColumn::Filename, SortOrder::Ascending);
        let names: Vec<_> = table.rows().map(|(_, r)| r.filename.clone()).collect();
        assert_eq!(names, vec!["alpha.png", "Beta.png"]);
    }

    #[test]
    fn sort_keeps_the_mapping_intact() {
        let mut table = ResultsTable::default();
        let small = table.insert(record("small.png", (2, 2)));
        let large = table.insert(record("large.png", (100, 100)));

        table.sort(SortColumn::Dimensions, SortOrder::Descending);
        assert_eq!(table.path_for(small), Some(Path::new("/pics/small.png")));
        assert_eq!(table.path_for(large), Some(Path::new("/pics/large.png")));
        let first = table.rows().next().unwrap();
        assert_eq!(first.1.filename, "large.png");
    }
}
