use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Program override key for the terminal launcher.
pub const TERMINAL_PROGRAM: &str = "wt";
/// Program override key for the editor launcher.
pub const EDITOR_PROGRAM: &str = "code";

/// Everything `see` persists: alias bookmarks plus executable overrides for
/// the external programs it can launch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AliasDocument {
    #[serde(default)]
    pub program: BTreeMap<String, String>,
    #[serde(default)]
    pub pathlist: BTreeMap<String, String>,
}

impl AliasDocument {
    pub fn get_path(&self, name: &str) -> Option<&str> {
        self.pathlist.get(name).map(String::as_str)
    }

    /// Inserts or overwrites an alias, returning the previous path if any.
    pub fn add_path(&mut self, name: &str, path: &str) -> Option<String> {
        self.pathlist.insert(name.to_string(), path.to_string())
    }

    pub fn remove_path(&mut self, name: &str) -> Option<String> {
        self.pathlist.remove(name)
    }

    /// Moves the alias `old` to `new`, replacing whatever `new` held.
    /// Returns false and leaves the document alone when `old` is absent.
    pub fn rename_path(&mut self, old: &str, new: &str) -> bool {
        match self.pathlist.remove(old) {
            Some(path) => {
                self.pathlist.insert(new.to_string(), path);
                true
            }
            None => false,
        }
    }

    /// Empty overrides count as unset.
    pub fn program_path(&self, name: &str) -> Option<&str> {
        self.program
            .get(name)
            .map(String::as_str)
            .filter(|path| !path.trim().is_empty())
    }

    pub fn set_program_path(&mut self, name: &str, path: &str) {
        self.program.insert(name.to_string(), path.to_string());
    }
}
