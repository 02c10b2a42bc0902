use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::Context;
use log::info;
use serde::{de::DeserializeOwned, Serialize};

/// Loads an index file as a list of records. A missing file is an empty
/// list; a file that exists but cannot be read or parsed is an error, so a
/// malformed index aborts the run and stays on disk for inspection.
pub(crate) fn load<T: DeserializeOwned>(index_path: &Path) -> anyhow::Result<Vec<T>> {
    if index_path.exists() {
        let fd = File::open(index_path)?;
        let reader = BufReader::new(fd);
        serde_json::from_reader(reader).with_context(|| format!("while reading {index_path:?}"))
    } else {
        info!("Index file({index_path:?}) does not exist. Starting from an empty list...");
        Ok(vec![])
    }
}

pub(crate) fn save<T: Serialize>(index_path: &Path, entries: &[T]) -> anyhow::Result<()> {
    let fd = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(index_path)?;
    let writer = BufWriter::new(fd);
    serde_json::to_writer_pretty(writer, entries)
        .with_context(|| format!("while writing {index_path:?}"))?;

    Ok(())
}

/// Replace semantics: every entry matching `replaces` is dropped, then the
/// new entry goes in at the head so the list stays newest-first.
pub(crate) fn upsert<T>(entries: &mut Vec<T>, entry: T, replaces: impl Fn(&T) -> bool) {
    entries.retain(|e| !replaces(e));
    entries.insert(0, entry);
}
