//! Durable mirror of the cart.
//!
//! A mirror is a single named key-value slot holding the serialized cart.
//! It is read once at startup, rewritten after every cart mutation and
//! erased when the cart is cleared.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// Default slot name, shared with the browser storefront's storage key.
pub const DEFAULT_CART_KEY: &str = "cartItems";

/// Errors raised by mirror backends.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Reading, writing or removing the slot failed.
    #[error("Cart storage I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The cart could not be serialized.
    #[error("Failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MirrorError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// A single durable slot for the serialized cart.
pub trait CartMirror {
    /// Read the slot. `Ok(None)` means nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns `MirrorError` if the backend cannot be read.
    fn read(&self) -> Result<Option<String>, MirrorError>;

    /// Replace the slot contents.
    ///
    /// # Errors
    ///
    /// Returns `MirrorError` if the backend cannot be written.
    fn write(&mut self, contents: &str) -> Result<(), MirrorError>;

    /// Remove the slot. Erasing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns `MirrorError` if the backend cannot be modified.
    fn erase(&mut self) -> Result<(), MirrorError>;
}

/// Mirror stored as a JSON file, `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileMirror {
    path: PathBuf,
}

impl FileMirror {
    /// Mirror for slot `key` inside `dir`. Nothing is touched until the first write.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Location of the slot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl CartMirror for FileMirror {
    fn read(&self) -> Result<Option<String>, MirrorError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MirrorError::io(&self.path, e)),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), MirrorError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| MirrorError::io(dir, e))?;
        }

        // Write then rename so readers never observe a partial slot.
        let staging = self.staging_path();
        std::fs::write(&staging, contents).map_err(|e| MirrorError::io(&staging, e))?;
        std::fs::rename(&staging, &self.path).map_err(|e| MirrorError::io(&self.path, e))
    }

    fn erase(&mut self) -> Result<(), MirrorError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MirrorError::io(&self.path, e)),
        }
    }
}

/// In-process mirror.
///
/// Clones share the same slot, so a clone handed to a second store behaves
/// like reopening the same storage after a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryMirror {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryMirror {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror pre-seeded with `contents`.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(contents.into()))),
        }
    }

    /// Current slot contents.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CartMirror for MemoryMirror {
    fn read(&self) -> Result<Option<String>, MirrorError> {
        Ok(self.contents())
    }

    fn write(&mut self, contents: &str) -> Result<(), MirrorError> {
        *self.slot.borrow_mut() = Some(contents.to_owned());
        Ok(())
    }

    fn erase(&mut self) -> Result<(), MirrorError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
