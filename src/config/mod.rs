// Author: Dustin Pilgrim
// License: MIT

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::node::ConfigNode;
use crate::parser::{ParseOptions, Parser};
use crate::PikError;

/// A parsed config file together with where it came from.
///
/// File handling lives here so the parser and writer only ever see line
/// streams and sinks.
#[derive(Debug, Clone, PartialEq)]
pub struct PikConfig {
    root: ConfigNode,
    path: Option<PathBuf>,
    options: ParseOptions,
}

impl PikConfig {
    /// Load a config file.
    ///
    /// A leading `~/` in the path is expanded to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = PikConfig::from_file("~/pik2/carry/objects.txt")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PikError> {
        Self::from_file_with_options(path, ParseOptions::default())
    }

    pub fn from_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self, PikError> {
        let path = expand_home(path.as_ref())?;

        let file = File::open(&path).map_err(|e| PikError::FileError {
            message: format!("Failed to open file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(401),
        })?;

        let root = Parser::new(options).parse_reader(BufReader::new(file))?;
        debug!(path = %path.display(), entries = root.len(), "loaded config");

        Ok(Self {
            root,
            path: Some(path),
            options,
        })
    }

    /// Load a config file with fallback support.
    ///
    /// Tries the primary path first. If that file can't be opened, loads the
    /// fallback instead. Parse errors in the primary are returned as is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, PikError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(PikError::FileError { message: primary_message, .. }) => {
                warn!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    "primary config unavailable, using fallback"
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    PikError::FileError { message, .. } => PikError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' ({}) or fallback path '{}': {}",
                            primary.as_ref().display(),
                            primary_message,
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(402),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Parse config text that didn't come from a file.
    pub fn from_str(content: &str) -> Result<Self, PikError> {
        Ok(Self::from_root(Parser::default().parse_str(content)?))
    }

    pub fn from_reader<R: Read>(reader: R, options: ParseOptions) -> Result<Self, PikError> {
        let root = Parser::new(options).parse_reader(BufReader::new(reader))?;
        Ok(Self {
            root,
            path: None,
            options,
        })
    }

    pub fn from_root(root: ConfigNode) -> Self {
        Self {
            root,
            path: None,
            options: ParseOptions::default(),
        }
    }

    pub fn root(&self) -> &ConfigNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ConfigNode {
        &mut self.root
    }

    pub fn into_root(self) -> ConfigNode {
        self.root
    }

    /// The file this config was loaded from or last saved to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Reload from the backing file, discarding in-memory changes.
    pub fn reload(&mut self) -> Result<(), PikError> {
        let path = self.path.clone().ok_or_else(|| PikError::FileError {
            message: "Config has no backing file".into(),
            path: String::new(),
            hint: Some("Use save_to() first or load with from_file()".into()),
            code: Some(403),
        })?;
        *self = Self::from_file_with_options(path, self.options)?;
        Ok(())
    }

    /// Write the tree back to the file it was loaded from.
    pub fn save(&self) -> Result<(), PikError> {
        let path = self.path.as_deref().ok_or_else(|| PikError::FileError {
            message: "Config has no backing file".into(),
            path: String::new(),
            hint: Some("Use save_to() with an explicit path".into()),
            code: Some(403),
        })?;
        write_file(&self.root, path)
    }

    /// Write the tree to `path` and remember it for later `save()` calls.
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PikError> {
        let path = expand_home(path.as_ref())?;
        write_file(&self.root, &path)?;
        self.path = Some(path);
        Ok(())
    }
}

fn write_file(root: &ConfigNode, path: &Path) -> Result<(), PikError> {
    let file_error = |e: std::io::Error| PikError::FileError {
        message: format!("Failed to write file: {}", e),
        path: path.to_string_lossy().to_string(),
        hint: Some("Check that the directory exists and is writable".into()),
        code: Some(406),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(file_error)?;
    }
    let file = File::create(path).map_err(file_error)?;
    root.write_to(BufWriter::new(file)).map_err(file_error)?;

    debug!(path = %path.display(), entries = root.len(), "saved config");
    Ok(())
}

/// Expand a leading `~/` to the user's home directory.
fn expand_home(path: &Path) -> Result<PathBuf, PikError> {
    match path.to_str().and_then(|s| s.strip_prefix("~/")) {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| PikError::FileError {
                message: "Could not determine home directory for ~ expansion".into(),
                path: path.to_string_lossy().to_string(),
                hint: Some("Set HOME or use an absolute path".into()),
                code: Some(400),
            })?;
            Ok(home.join(rest))
        }
        None => Ok(path.to_path_buf()),
    }
}
