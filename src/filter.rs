//! Per-entry eligibility: include and exclude predicates, split by entry kind.

use crate::error::WalkError;
use crate::types::{BoxedPredicate, DirEntry};

/// Decides whether an entry is yielded (files) or yielded and descended into
/// (directories).
///
/// An entry passes when its kind's include predicate is absent or accepts it,
/// and its kind's exclude predicate is absent or rejects it.
#[derive(Default)]
pub(crate) struct EntryFilter {
    pub(crate) follow_links: bool,
    filter_dirs: Option<BoxedPredicate>,
    filter_files: Option<BoxedPredicate>,
    exclude_dirs: Option<BoxedPredicate>,
    exclude_files: Option<BoxedPredicate>,
    // Combined predicates; never set alongside a kind-specific one.
    filter_both: Option<BoxedPredicate>,
    exclude_both: Option<BoxedPredicate>,
}

/// Predicates as handed to the builder, before the exclusivity check.
#[derive(Default)]
pub(crate) struct PredicateSet {
    pub(crate) filter: Option<BoxedPredicate>,
    pub(crate) filter_dirs: Option<BoxedPredicate>,
    pub(crate) filter_files: Option<BoxedPredicate>,
    pub(crate) exclude: Option<BoxedPredicate>,
    pub(crate) exclude_dirs: Option<BoxedPredicate>,
    pub(crate) exclude_files: Option<BoxedPredicate>,
}

impl EntryFilter {
    pub(crate) fn new(set: PredicateSet, follow_links: bool) -> Result<Self, WalkError> {
        exclusive("filter", &set.filter, "filter_dirs", &set.filter_dirs)?;
        exclusive("filter", &set.filter, "filter_files", &set.filter_files)?;
        exclusive("exclude", &set.exclude, "exclude_dirs", &set.exclude_dirs)?;
        exclusive("exclude", &set.exclude, "exclude_files", &set.exclude_files)?;
        Ok(Self {
            follow_links,
            filter_dirs: set.filter_dirs,
            filter_files: set.filter_files,
            exclude_dirs: set.exclude_dirs,
            exclude_files: set.exclude_files,
            filter_both: set.filter,
            exclude_both: set.exclude,
        })
    }

    pub(crate) fn accepts(&mut self, entry: &DirEntry) -> bool {
        let (include, exclude) = if entry.is_dir(self.follow_links) {
            (&mut self.filter_dirs, &mut self.exclude_dirs)
        } else {
            (&mut self.filter_files, &mut self.exclude_files)
        };
        let include = include.as_mut().or(self.filter_both.as_mut());
        if !include.is_none_or(|p| p.test(entry)) {
            return false;
        }
        let exclude = exclude.as_mut().or(self.exclude_both.as_mut());
        !exclude.is_some_and(|p| p.test(entry))
    }
}

fn exclusive(
    combined: &str,
    a: &Option<BoxedPredicate>,
    specific: &str,
    b: &Option<BoxedPredicate>,
) -> Result<(), WalkError> {
    if a.is_some() && b.is_some() {
        return Err(WalkError::config(format!(
            "{} and {} are mutually exclusive",
            combined, specific
        )));
    }
    Ok(())
}
