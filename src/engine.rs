use crate::error::WalkError;
use crate::filter::EntryFilter;
use crate::options::{WalkBuilder, WalkOptions, ignore_error};
use crate::sort::Sorter;
use crate::types::{DirEntry, ErrorHandler};
use std::fs::{self, ReadDir};
use std::io;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::vec;

/// Pending children of one directory.
enum Entries {
    Scan(ReadDir),
    Sorted(vec::IntoIter<DirEntry>),
}

/// One directory currently being traversed.
struct Frame {
    path: PathBuf,
    entries: Entries,
}

impl Frame {
    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            entries: Entries::Sorted(Vec::new().into_iter()),
        }
    }

    /// Next entry that passes `filter`, or the scan error that ended this
    /// directory.
    fn next_entry(&mut self, filter: &mut EntryFilter) -> Option<io::Result<DirEntry>> {
        match &mut self.entries {
            Entries::Scan(scan) => loop {
                let raw = match scan.next()? {
                    Ok(raw) => raw,
                    Err(e) => return Some(Err(e)),
                };
                let entry = DirEntry::from_std(&self.path, raw);
                if filter.accepts(&entry) {
                    return Some(Ok(entry));
                }
            },
            Entries::Sorted(entries) => entries.next().map(Ok),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotStarted,
    Active,
    Exhausted,
    Closed,
}

/// Result of pulling once from the top frame.
enum Pull {
    Entry(DirEntry),
    Failed(io::Error),
    Done,
}

/// A lazy depth-first walk over a directory tree.
///
/// Each call to [`next`](Iterator::next) does just enough work to produce one
/// path. Between calls the walk holds one open directory handle per level of
/// nesting (fewer when sorting, which drains each level on entry). Handles are
/// released by [`close`](Walk::close), on exhaustion, or when the walk is
/// dropped.
///
/// Paths are built by joining entry names onto the root exactly as given: an
/// absolute root yields absolute paths, a relative root yields relative paths
/// prefixed by it. A walk of the current directory (empty root) yields the
/// root as `.` and everything else without a `./` prefix. With
/// `return_relative` every path is relative to the root, and the root itself
/// is the empty path.
///
/// When the root is relative, changing the process's working directory during
/// the walk gives unspecified results. With `follow_links`, a link to an
/// ancestor directory makes the walk descend forever.
pub struct Walk {
    options: WalkOptions,
    filter: EntryFilter,
    sorter: Option<Sorter>,
    on_error: ErrorHandler,
    state: State,
    stack: Vec<Frame>,
    /// Directory whose path was just yielded in pre-order; its frame is opened
    /// on the next pull.
    pending: Option<PathBuf>,
}

/// Walks `root` with default settings: pre-order, unsorted, directories
/// included, symlinks not followed, errors ignored.
pub fn walk(root: impl Into<PathBuf>) -> Walk {
    let options = WalkOptions {
        root: root.into(),
        ..Default::default()
    };
    Walk::from_parts(options, EntryFilter::default(), None, Box::new(ignore_error))
}

impl Walk {
    pub(crate) fn from_parts(
        options: WalkOptions,
        filter: EntryFilter,
        sorter: Option<Sorter>,
        on_error: ErrorHandler,
    ) -> Self {
        Self {
            options,
            filter,
            sorter,
            on_error,
            state: State::NotStarted,
            stack: Vec::new(),
            pending: None,
        }
    }

    pub fn builder(root: impl Into<PathBuf>) -> WalkBuilder {
        WalkBuilder::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.options.root
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Number of directory frames currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    /// Releases every open directory handle. Further pulls yield nothing.
    /// Safe to call any number of times.
    pub fn close(&mut self) {
        if self.state == State::Closed {
            return;
        }
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Closing walk of {} with {} open frames",
            self.options.root.display(),
            self.stack.len()
        );
        while let Some(frame) = self.stack.pop() {
            drop(frame);
        }
        self.pending = None;
        self.state = State::Closed;
    }

    fn step(&mut self) -> Result<Option<PathBuf>, WalkError> {
        match self.state {
            State::Exhausted | State::Closed => return Ok(None),
            State::NotStarted => {
                #[cfg(feature = "logging")]
                tracing::debug!("Starting walk with root: {}", self.options.root.display());
                self.state = State::Active;
                let root = self.open_frame(self.options.root.clone())?;
                self.stack.push(root);
                if self.options.include_root && self.options.topdown {
                    return Ok(Some(self.options.root.clone()));
                }
            }
            State::Active => {}
        }
        if let Some(dir) = self.pending.take() {
            let frame = self.open_frame(dir)?;
            self.stack.push(frame);
        }
        while let Some(top) = self.stack.last_mut() {
            let pulled = match top.next_entry(&mut self.filter) {
                Some(Ok(entry)) => Pull::Entry(entry),
                Some(Err(e)) => Pull::Failed(e),
                None => Pull::Done,
            };
            match pulled {
                Pull::Entry(entry) => {
                    if !entry.is_dir(self.options.follow_links) {
                        return Ok(Some(entry.into_path()));
                    }
                    if self.options.dirs && self.options.topdown {
                        let path = entry.into_path();
                        self.pending = Some(path.clone());
                        return Ok(Some(path));
                    }
                    let frame = self.open_frame(entry.into_path())?;
                    self.stack.push(frame);
                }
                Pull::Failed(source) => {
                    let path = top_path(&self.stack);
                    self.report(WalkError::io(path, source))?;
                    if let Some(path) = self.pop_frame() {
                        return Ok(Some(path));
                    }
                }
                Pull::Done => {
                    if let Some(path) = self.pop_frame() {
                        return Ok(Some(path));
                    }
                }
            }
        }
        self.state = State::Exhausted;
        Ok(None)
    }

    /// Pops the top frame, returning its path when post-order requires it to
    /// be yielded now.
    fn pop_frame(&mut self) -> Option<PathBuf> {
        let frame = self.stack.pop()?;
        if self.options.topdown {
            return None;
        }
        let is_root = self.stack.is_empty();
        let wanted = if is_root {
            self.options.include_root
        } else {
            self.options.dirs
        };
        wanted.then_some(frame.path)
    }

    /// Opens `path` for scanning. Failures go through the error callback and
    /// leave an empty frame behind unless the callback aborts.
    fn open_frame(&mut self, path: PathBuf) -> Result<Frame, WalkError> {
        let scan_path = if path.as_os_str().is_empty() {
            Path::new(".")
        } else {
            path.as_path()
        };
        let scan = match fs::read_dir(scan_path) {
            Ok(scan) => scan,
            Err(source) => {
                self.report(WalkError::io(&path, source))?;
                return Ok(Frame::empty(path));
            }
        };
        let mut frame = Frame {
            path,
            entries: Entries::Scan(scan),
        };
        if self.sorter.is_none() {
            return Ok(frame);
        }
        let mut entries = Vec::new();
        loop {
            match frame.next_entry(&mut self.filter) {
                Some(Ok(entry)) => entries.push(entry),
                Some(Err(source)) => {
                    self.report(WalkError::io(&frame.path, source))?;
                    break;
                }
                None => break,
            }
        }
        if let Some(sorter) = self.sorter.as_mut() {
            sorter.sort(&mut entries);
        }
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Sorted {} entries in {}",
            entries.len(),
            frame.path.display()
        );
        frame.entries = Entries::Sorted(entries.into_iter());
        Ok(frame)
    }

    fn report(&mut self, error: WalkError) -> Result<(), WalkError> {
        #[cfg(feature = "logging")]
        tracing::debug!("{}", error);
        (self.on_error)(error)
    }

    fn relativize(&self, path: PathBuf) -> PathBuf {
        if !self.options.return_relative {
            // Only the root of a current-directory walk is empty.
            if path.as_os_str().is_empty() {
                return PathBuf::from(".");
            }
            return path;
        }
        match path.strip_prefix(&self.options.root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => path,
        }
    }
}

fn top_path(stack: &[Frame]) -> PathBuf {
    stack.last().map(|f| f.path.clone()).unwrap_or_default()
}

impl Iterator for Walk {
    type Item = Result<PathBuf, WalkError>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(Some(path)) => Some(Ok(self.relativize(path))),
            Ok(None) => None,
            Err(e) => {
                self.close();
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Walk {}

impl Drop for Walk {
    fn drop(&mut self) {
        self.close();
    }
}
