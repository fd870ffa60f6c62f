use std::path::PathBuf;

use crate::model::{RowId, ScanReport, SortColumn};

#[derive(Debug, Clone)]
pub enum Message {
    BrowseFolder,
    FolderPicked(Option<PathBuf>),
    FolderInputChanged(String),
    ScanRequested,
    ScanFinished(ScanReport),
    RowPressed(RowId),
    SortRequested(SortColumn),
}
