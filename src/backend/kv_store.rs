use std::{collections::{BTreeMap, HashMap}, fs, io, path::{Path, PathBuf}};

use log::{debug, warn};

use crate::backend::{KeyValueStore, PersistenceError, Result};

const TMP_SUFFIX: &str = "tmp";

type StringMap = BTreeMap<String, String>;

/// Keys and string values kept in one JSON object on disk.
/// A missing file holds no keys.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    path: PathBuf
}

impl FileKvStore {
    pub fn new(path: impl AsRef<Path>) -> FileKvStore {
        FileKvStore { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io { path: self.path.clone(), source }
    }

    fn corrupt(&self, reason: impl ToString) -> PersistenceError {
        PersistenceError::Corrupt { key: self.path.display().to_string(), reason: reason.to_string() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".");
        name.push(TMP_SUFFIX);
        PathBuf::from(name)
    }

    fn read_map(&self) -> Result<StringMap> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(StringMap::new()),
            Err(err) => return Err(self.io_error(err))
        };
        let content = String::from_utf8(bytes).map_err(|err| self.corrupt(err))?;
        if content.trim().is_empty() {
            return Ok(StringMap::new());
        }
        serde_json::from_str(&content).map_err(|err| self.corrupt(err))
    }

    fn write_map(&self, map: &StringMap) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        let serialized = serde_json::to_string_pretty(map)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, serialized).map_err(|err| self.io_error(err))?;
        fs::rename(&tmp, &self.path).map_err(|err| self.io_error(err))?;
        return Ok(());
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut map = self.read_map()?;
        return Ok(map.remove(key));
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(PersistenceError::Corrupt { reason, .. }) => {
                warn!("discarding unreadable store {}: {}", self.path.display(), reason);
                StringMap::new()
            },
            Err(err) => return Err(err)
        };
        map.insert(key.to_owned(), value.to_owned());
        self.write_map(&map)?;
        debug!("wrote key {:?} to {}", key, self.path.display());
        return Ok(());
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    values: HashMap<String, String>
}

impl MemoryKvStore {
    pub fn new() -> MemoryKvStore {
        MemoryKvStore::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
