use std::cell::OnceCell;
use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

use crate::error::WalkError;

/// A single child of a directory being walked.
///
/// This is what predicates, comparators and selectors see. The path is formed
/// by joining the directory's path (as the walk presents it) with the entry's
/// name, so it has the same shape as the paths the walk yields.
#[derive(Debug)]
pub struct DirEntry {
    path: PathBuf,
    name: OsString,
    /// File type without following symlinks; `None` if the OS could not report one.
    file_type: Option<FileType>,
    followed_dir: OnceCell<bool>,
}

impl DirEntry {
    pub(crate) fn from_std(dir: &Path, raw: fs::DirEntry) -> Self {
        let name = raw.file_name();
        Self {
            path: dir.join(&name),
            file_type: raw.file_type().ok(),
            name,
            followed_dir: OnceCell::new(),
        }
    }

    /// The full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The bare file name of this entry.
    pub fn file_name(&self) -> &OsStr {
        &self.name
    }

    /// The entry's file type as reported by the directory scan. Symlinks are
    /// not followed.
    pub fn file_type(&self) -> Option<FileType> {
        self.file_type
    }

    pub fn is_symlink(&self) -> bool {
        self.file_type.is_some_and(|ft| ft.is_symlink())
    }

    /// Whether this entry is a directory.
    ///
    /// With `follow_links`, a symlink pointing at a directory counts as one.
    /// Any failure while inspecting the entry (dangling link, vanished file)
    /// classifies it as a non-directory.
    pub fn is_dir(&self, follow_links: bool) -> bool {
        let Some(ft) = self.file_type else {
            return false;
        };
        if !ft.is_symlink() {
            return ft.is_dir();
        }
        if !follow_links {
            return false;
        }
        *self
            .followed_dir
            .get_or_init(|| fs::metadata(&self.path).is_ok_and(|m| m.is_dir()))
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Callback receiving every OS error met while opening or scanning a
/// directory. Returning `Err` aborts the walk with that error.
pub type ErrorHandler = Box<dyn FnMut(WalkError) -> Result<(), WalkError> + Send>;

/// Comparator used to order the entries of one directory.
pub type Comparator = Box<dyn FnMut(&DirEntry, &DirEntry) -> Ordering + Send>;

/// Anything that can accept or reject a [`DirEntry`].
///
/// Implemented for closures and for the selectors in [`crate::select`].
pub trait EntryPredicate: Send {
    fn test(&mut self, entry: &DirEntry) -> bool;
}

impl<F> EntryPredicate for F
where
    F: FnMut(&DirEntry) -> bool + Send,
{
    fn test(&mut self, entry: &DirEntry) -> bool {
        self(entry)
    }
}

pub(crate) type BoxedPredicate = Box<dyn EntryPredicate>;
