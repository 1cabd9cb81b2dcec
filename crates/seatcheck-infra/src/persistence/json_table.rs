//! A keyed table persisted as one pretty-printed JSON file

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use seatcheck_types::{Result, StoreError};

pub(crate) struct JsonTable<T> {
    store_path: PathBuf,
    rows: RwLock<HashMap<String, T>>,
}

impl<T> JsonTable<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Create or load a table file inside `store_dir`
    pub fn open(store_dir: &Path, file_name: &str) -> Result<Self> {
        fs::create_dir_all(store_dir)?;
        let store_path = store_dir.join(file_name);

        let rows = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|e| {
                StoreError::Corrupted(format!("{}: {}", store_path.display(), e))
            })?
        } else {
            HashMap::new()
        };
        debug!(path = %store_path.display(), "opened table");

        Ok(Self {
            store_path,
            rows: RwLock::new(rows),
        })
    }

    pub fn read<R>(&self, f: impl FnOnce(&HashMap<String, T>) -> R) -> Result<R> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Poisoned("read"))?;
        Ok(f(&rows))
    }

    /// Mutate a copy under the write lock; the copy replaces the rows only
    /// once it is on disk, so a failed closure or save changes nothing
    pub fn write<R>(&self, f: impl FnOnce(&mut HashMap<String, T>) -> Result<R>) -> Result<R> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Poisoned("write"))?;
        let mut staged = rows.clone();
        let result = f(&mut staged)?;
        self.persist(&staged)?;
        *rows = staged;
        Ok(result)
    }

    pub fn get(&self, id: &str) -> Result<Option<T>> {
        self.read(|rows| rows.get(id).cloned())
    }

    pub fn values(&self) -> Result<Vec<T>> {
        self.read(|rows| rows.values().cloned().collect())
    }

    /// Save to a sibling temp file and rename over the table
    fn persist(&self, rows: &HashMap<String, T>) -> Result<()> {
        let tmp_path = self.store_path.with_extension("json.tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.store_path)?;
        Ok(())
    }
}
