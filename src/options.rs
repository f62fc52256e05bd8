use crate::engine::Walk;
use crate::error::WalkError;
use crate::filter::{EntryFilter, PredicateSet};
use crate::sort::Sorter;
use crate::types::{Comparator, DirEntry, EntryPredicate, ErrorHandler};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// Plain-data walk settings. Predicates, comparators and the error callback
/// live on [`WalkBuilder`] since they cannot be serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkOptions {
    pub root: PathBuf,
    pub topdown: bool,
    pub include_root: bool,
    pub dirs: bool,
    pub follow_links: bool,
    pub sort: bool,
    pub sort_reverse: bool,
    pub return_relative: bool,
}
impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            topdown: true,
            include_root: false,
            dirs: true,
            follow_links: false,
            sort: false,
            sort_reverse: false,
            return_relative: false,
        }
    }
}
#[derive(Default)]
pub struct WalkBuilder {
    options: WalkOptions,
    predicates: PredicateSet,
    compare: Option<Comparator>,
    on_error: Option<ErrorHandler>,
}
impl WalkBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_options(WalkOptions {
            root: root.into(),
            ..Default::default()
        })
    }
    /// Walks the process's current directory. Yielded paths carry no `./`
    /// prefix.
    pub fn current_dir() -> Self {
        Self::new(PathBuf::new())
    }
    pub fn from_options(options: WalkOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }
    pub fn topdown(mut self, yes: bool) -> Self {
        self.options.topdown = yes;
        self
    }
    pub fn include_root(mut self, yes: bool) -> Self {
        self.options.include_root = yes;
        self
    }
    pub fn dirs(mut self, yes: bool) -> Self {
        self.options.dirs = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn sort(mut self, yes: bool) -> Self {
        self.options.sort = yes;
        self
    }
    pub fn sort_reverse(mut self, yes: bool) -> Self {
        self.options.sort_reverse = yes;
        self
    }
    pub fn return_relative(mut self, yes: bool) -> Self {
        self.options.return_relative = yes;
        self
    }
    /// Sets the comparator used when sorting is on. Defaults to file name
    /// ascending.
    pub fn sort_by<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&DirEntry, &DirEntry) -> std::cmp::Ordering + Send + 'static,
    {
        self.compare = Some(Box::new(compare));
        self
    }
    pub fn sort_by_key<K, F>(self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&DirEntry) -> K + Send + 'static,
    {
        self.sort_by(move |a, b| {
            let ka = key(a);
            ka.cmp(&key(b))
        })
    }
    /// Include predicate for both directories and files. Conflicts with
    /// [`filter_dirs`](Self::filter_dirs) and [`filter_files`](Self::filter_files).
    pub fn filter(mut self, p: impl EntryPredicate + 'static) -> Self {
        self.predicates.filter = Some(Box::new(p));
        self
    }
    pub fn filter_dirs(mut self, p: impl EntryPredicate + 'static) -> Self {
        self.predicates.filter_dirs = Some(Box::new(p));
        self
    }
    pub fn filter_files(mut self, p: impl EntryPredicate + 'static) -> Self {
        self.predicates.filter_files = Some(Box::new(p));
        self
    }
    /// Exclude predicate for both directories and files. Conflicts with
    /// [`exclude_dirs`](Self::exclude_dirs) and [`exclude_files`](Self::exclude_files).
    pub fn exclude(mut self, p: impl EntryPredicate + 'static) -> Self {
        self.predicates.exclude = Some(Box::new(p));
        self
    }
    pub fn exclude_dirs(mut self, p: impl EntryPredicate + 'static) -> Self {
        self.predicates.exclude_dirs = Some(Box::new(p));
        self
    }
    pub fn exclude_files(mut self, p: impl EntryPredicate + 'static) -> Self {
        self.predicates.exclude_files = Some(Box::new(p));
        self
    }
    /// Installs the OS error callback. Return `Ok(())` to skip the affected
    /// directory, or the error to abort the walk. Errors are ignored by default.
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: FnMut(WalkError) -> Result<(), WalkError> + Send + 'static,
    {
        self.on_error = Some(Box::new(handler));
        self
    }
    pub fn options(&self) -> &WalkOptions {
        &self.options
    }
    /// Validates the configuration and creates the walk. Touches no files.
    pub fn build(self) -> Result<Walk, WalkError> {
        let filter = EntryFilter::new(self.predicates, self.options.follow_links)?;
        let sorter = self
            .options
            .sort
            .then(|| Sorter::new(self.compare, self.options.sort_reverse));
        let on_error = self
            .on_error
            .unwrap_or_else(|| Box::new(ignore_error) as ErrorHandler);
        Ok(Walk::from_parts(self.options, filter, sorter, on_error))
    }
}
pub(crate) fn ignore_error(_: WalkError) -> Result<(), WalkError> {
    Ok(())
}
