//! Weak-substring denylist.
//!
//! The built-in list is constant data. A longer list can be loaded from a
//! file and passed explicitly to [`crate::analyze_with`].

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Substrings that mark a password as built on a common pattern.
pub const COMMON_PATTERNS: [&str; 10] = [
    "password", "123456", "qwerty", "admin", "welcome", "letmein", "monkey", "dragon",
    "baseball", "football",
];

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Ordered, lowercase list of weak substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    entries: Vec<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self {
            entries: COMMON_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Denylist {
    /// Builds a denylist from the built-in entries followed by the entries of
    /// a file, one per line. Lines are trimmed and lowercased; blank lines
    /// and duplicates are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no entries
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let denylist = pwd_forge::Denylist::from_path("/etc/myapp/weak.txt")?;
    /// let result = pwd_forge::analyze_with(&password, true, &denylist);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: FileNotFound {}", path.display());
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: Empty file {}", path.display());
            return Err(DenylistError::EmptyFile);
        }

        let mut denylist = Self::default();
        for line in content.lines() {
            denylist.push(line);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Denylist loaded: {} extra entries from {:?}",
            denylist.len() - COMMON_PATTERNS.len(),
            path
        );

        Ok(denylist)
    }

    fn push(&mut self, entry: &str) {
        let entry = entry.trim().to_lowercase();
        if !entry.is_empty() && !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns every entry contained in `password`, in list order.
    /// The comparison is case-insensitive.
    pub fn find_matches(&self, password: &str) -> Vec<String> {
        let lower = password.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| lower.contains(entry.as_str()))
            .cloned()
            .collect()
    }
}
