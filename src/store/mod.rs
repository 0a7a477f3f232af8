mod path;

use crate::error::SeeError;
use crate::model::AliasDocument;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub use path::{home_dir, resolve_store_path};

/// Alias bookmarks kept in a single JSON file. Every operation reads the
/// whole document and every mutation rewrites it.
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_path(&self, name: &str) -> Result<Option<String>> {
        let doc = self.load()?;
        Ok(doc.get_path(name).map(str::to_string))
    }

    pub fn add_path(&self, name: &str, path: &str) -> Result<()> {
        let mut doc = self.load()?;
        if let Some(previous) = doc.add_path(name, path) {
            debug!("alias '{}' replaced {} with {}", name, previous, path);
        }
        self.save(&doc)
    }

    pub fn remove_path(&self, name: &str) -> Result<()> {
        let mut doc = self.load()?;
        if doc.remove_path(name).is_none() {
            return Err(SeeError::NotFound(name.to_string()).into());
        }
        self.save(&doc)
    }

    pub fn rename_path(&self, old: &str, new: &str) -> Result<()> {
        let mut doc = self.load()?;
        if !doc.rename_path(old, new) {
            return Err(SeeError::NotFound(old.to_string()).into());
        }
        self.save(&doc)
    }

    pub fn get_program_path(&self, name: &str) -> Result<Option<String>> {
        let doc = self.load()?;
        Ok(doc.program_path(name).map(str::to_string))
    }

    pub fn set_program_path(&self, name: &str, path: &str) -> Result<()> {
        let mut doc = self.load()?;
        doc.set_program_path(name, path);
        self.save(&doc)
    }

    pub fn list_paths(&self) -> Result<Vec<(String, String)>> {
        Ok(self.load()?.pathlist.into_iter().collect())
    }

    pub fn list_programs(&self) -> Result<Vec<(String, String)>> {
        Ok(self.load()?.program.into_iter().collect())
    }

    /// Reads the document, creating an empty one on disk if the file is
    /// missing.
    pub fn load(&self) -> Result<AliasDocument> {
        if !self.path.exists() {
            debug!("creating empty store at {}", self.path.display());
            let doc = AliasDocument::default();
            self.save(&doc)?;
            return Ok(doc);
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("unable to read store {}", self.path.display()))?;
        if data.trim().is_empty() {
            return Ok(AliasDocument::default());
        }
        let doc = serde_json::from_str(&data)
            .with_context(|| format!("unable to parse store {}", self.path.display()))?;
        Ok(doc)
    }

    pub fn save(&self, doc: &AliasDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("unable to create store directory {}", parent.display())
            })?;
        }
        let data = serde_json::to_string_pretty(doc).context("unable to serialize aliases")?;
        fs::write(&self.path, data)
            .with_context(|| format!("unable to write store {}", self.path.display()))?;
        debug!("saved {} aliases to {}", doc.pathlist.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AliasStore;
    use crate::error::SeeError;
    use crate::model::AliasDocument;
    use std::fs;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> AliasStore {
        AliasStore::new(dir.path().join("pathlist.json"))
    }

    fn not_found_name(err: anyhow::Error) -> String {
        match err.downcast::<SeeError>() {
            Ok(SeeError::NotFound(name)) => name,
            other => panic!("expected not-found, got {:?}", other),
        }
    }

    #[test]
    fn load_creates_missing_file_with_empty_maps() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);

        let doc = store.load().expect("load");
        assert_eq!(doc, AliasDocument::default());

        let written = fs::read_to_string(store.path()).expect("read");
        let value: serde_json::Value = serde_json::from_str(&written).expect("json");
        assert_eq!(value, serde_json::json!({ "program": {}, "pathlist": {} }));
    }

    #[test]
    fn load_creates_parent_directories() {
        let dir = tempdir().expect("tempdir");
        let store = AliasStore::new(dir.path().join("nested/deeper/pathlist.json"));
        store.load().expect("load");
        assert!(store.path().exists());
    }

    #[test]
    fn save_of_load_is_idempotent() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.add_path("proj", "/home/u/proj").expect("add");
        store.set_program_path("code", "/usr/bin/code").expect("program");

        let before = fs::read_to_string(store.path()).expect("read");
        let doc = store.load().expect("load");
        store.save(&doc).expect("save");
        let after = fs::read_to_string(store.path()).expect("read");
        assert_eq!(before, after);
    }

    #[test]
    fn add_then_get_and_overwrite() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.add_path("proj", "/a").expect("add");
        assert_eq!(store.get_path("proj").expect("get").as_deref(), Some("/a"));

        store.add_path("proj", "/b").expect("add");
        assert_eq!(store.get_path("proj").expect("get").as_deref(), Some("/b"));
        assert_eq!(store.get_path("nope").expect("get"), None);
    }

    #[test]
    fn remove_absent_reports_not_found_and_keeps_file() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.add_path("keep", "/keep").expect("add");
        let before = fs::read_to_string(store.path()).expect("read");

        let err = store.remove_path("ghost").expect_err("should fail");
        assert_eq!(not_found_name(err), "ghost");
        assert_eq!(fs::read_to_string(store.path()).expect("read"), before);
    }

    #[test]
    fn remove_existing_alias() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.add_path("tmp", "/tmp").expect("add");
        store.remove_path("tmp").expect("remove");
        assert!(store.list_paths().expect("list").is_empty());
    }

    #[test]
    fn rename_moves_alias() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.add_path("a", "/data").expect("add");

        store.rename_path("a", "b").expect("rename");
        assert_eq!(store.get_path("b").expect("get").as_deref(), Some("/data"));
        assert_eq!(store.get_path("a").expect("get"), None);
    }

    #[test]
    fn rename_absent_reports_not_found() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.add_path("b", "/b").expect("add");

        let err = store.rename_path("a", "b").expect_err("should fail");
        assert_eq!(not_found_name(err), "a");
        assert_eq!(store.get_path("b").expect("get").as_deref(), Some("/b"));
    }

    #[test]
    fn list_sorts_by_name() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.add_path("zeta", "/z").expect("add");
        store.add_path("alpha", "/a").expect("add");

        let list = store.list_paths().expect("list");
        assert_eq!(list[0].0, "alpha");
        assert_eq!(list[1].0, "zeta");
    }

    #[test]
    fn program_overrides_round_trip() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        assert_eq!(store.get_program_path("wt").expect("get"), None);

        store.set_program_path("wt", "/opt/wt").expect("set");
        assert_eq!(
            store.get_program_path("wt").expect("get").as_deref(),
            Some("/opt/wt")
        );
        assert_eq!(store.list_programs().expect("list").len(), 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").expect("write");

        let err = store.load().expect_err("should fail");
        assert!(err.to_string().contains("unable to parse store"));
        assert_eq!(
            fs::read_to_string(store.path()).expect("read"),
            "{ not json"
        );
    }

    #[test]
    fn blank_file_loads_as_empty_document() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        fs::write(store.path(), "  \n").expect("write");
        assert_eq!(store.load().expect("load"), AliasDocument::default());
    }
}
