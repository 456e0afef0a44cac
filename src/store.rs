use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{self, HashMap};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::PathBuf;

/// Directory under the user's home that holds the bookmark file.
pub const STORE_DIR: &str = ".ql";
/// Name of the bookmark file inside [`STORE_DIR`].
pub const STORE_FILE: &str = "list.json";

/// Name to location mapping. Serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookmarks(HashMap<String, String>);

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `name`, returning the previous location.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(name.into(), location.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Bookmarks {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// On-disk home of the bookmarks: `<dir>/list.json`.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Store rooted at `<home>/.ql`.
    pub fn locate() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine the user's home directory")?;
        Ok(Self::at(home.join(STORE_DIR)))
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(STORE_FILE)
    }

    /// Reads the bookmark file. A missing file is an empty list.
    pub fn load(&self) -> Result<Bookmarks> {
        self.ensure_dir()?;

        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Bookmarks::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(Bookmarks::new());
        }

        // a bare `null` document is an empty list too
        let bookmarks: Option<Bookmarks> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        Ok(bookmarks.unwrap_or_default())
    }

    /// Rewrites the bookmark file with the full contents of `bookmarks`.
    pub fn save(&self, bookmarks: &Bookmarks) -> Result<()> {
        self.ensure_dir()?;

        let path = self.path();
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, bookmarks)
            .with_context(|| format!("Failed to encode bookmarks into {}", path.display()))?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory {}", self.dir.display()))
    }
}
