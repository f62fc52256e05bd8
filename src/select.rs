//! Name-based selectors for use as walk filters and excludes.
//!
//! Selectors match on an entry's bare file name and compose with `|`:
//!
//! ```
//! use depthwalk::select::{SelectGlob, select_vcs};
//!
//! let skip = select_vcs() | SelectGlob::new("*.bak").unwrap();
//! assert_eq!(skip.selectors().len(), 4);
//! ```

use crate::error::WalkError;
use crate::types::{DirEntry, EntryPredicate};
use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::BitOr;
use std::path::Path;

pub trait Selector: Send {
    fn matches(&self, entry: &DirEntry) -> bool;

    /// Splits a union into its members; any other selector is its own sole
    /// member.
    fn into_members(self: Box<Self>) -> Vec<Box<dyn Selector>>
    where
        Self: Sized + 'static,
    {
        vec![self]
    }

    /// Union of `self` and `other`. Nested unions are flattened.
    fn or<S>(self, other: S) -> SelectAny
    where
        Self: Sized + 'static,
        S: Selector + 'static,
    {
        let mut selectors = Box::new(self).into_members();
        selectors.extend(Box::new(other).into_members());
        SelectAny { selectors }
    }
}

/// Matches entries whose names are in a fixed set.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectNames {
    names: BTreeSet<String>,
    case_sensitive: bool,
}

impl SelectNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            case_sensitive: true,
        }
    }

    /// Compares names without regard to case. The stored names are
    /// lowercased.
    pub fn case_insensitive(self) -> Self {
        Self {
            names: self.names.iter().map(|n| n.to_lowercase()).collect(),
            case_sensitive: false,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl Selector for SelectNames {
    fn matches(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if self.case_sensitive {
            self.names.contains(name.as_ref())
        } else {
            self.names.contains(&name.to_lowercase())
        }
    }
}

impl fmt::Debug for SelectNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SelectNames(")?;
        for name in &self.names {
            write!(f, "{:?}, ", name)?;
        }
        write!(f, "case_sensitive={})", self.case_sensitive)
    }
}

/// Matches entries whose names match a shell-style glob.
///
/// Only `*`, `?` and `[...]` (negated with `[!...]`) are special. Braces and
/// backslashes match themselves, so `{a,b}` selects the file named `{a,b}`.
#[derive(Debug, Clone)]
pub struct SelectGlob {
    pattern: String,
    matcher: GlobMatcher,
}

impl SelectGlob {
    pub fn new(pattern: &str) -> Result<Self, WalkError> {
        let matcher = compile_glob(pattern).map_err(|e| WalkError::pattern(pattern, e))?;
        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Selector for SelectGlob {
    fn matches(&self, entry: &DirEntry) -> bool {
        self.matcher.is_match(Path::new(entry.file_name()))
    }
}

/// Matches entries whose names contain a match for a regular expression.
/// The search is unanchored; use `^`/`$` to anchor.
#[derive(Debug, Clone)]
pub struct SelectRegex {
    regex: Regex,
}

impl SelectRegex {
    pub fn new(pattern: &str) -> Result<Self, WalkError> {
        let regex = Regex::new(pattern).map_err(|e| WalkError::pattern(pattern, e))?;
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Selector for SelectRegex {
    fn matches(&self, entry: &DirEntry) -> bool {
        self.regex.is_match(&entry.file_name().to_string_lossy())
    }
}

/// Matches entries matched by any member. Produced by [`Selector::or`] and `|`.
#[derive(Default)]
pub struct SelectAny {
    selectors: Vec<Box<dyn Selector>>,
}

impl SelectAny {
    pub fn new(selectors: Vec<Box<dyn Selector>>) -> Self {
        Self { selectors }
    }

    pub fn selectors(&self) -> &[Box<dyn Selector>] {
        &self.selectors
    }
}

impl Selector for SelectAny {
    fn matches(&self, entry: &DirEntry) -> bool {
        self.selectors.iter().any(|s| s.matches(entry))
    }

    fn into_members(self: Box<Self>) -> Vec<Box<dyn Selector>> {
        self.selectors
    }
}

impl fmt::Debug for SelectAny {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectAny")
            .field("len", &self.selectors.len())
            .finish()
    }
}

macro_rules! selector_glue {
    ($($ty:ty),*) => {$(
        impl EntryPredicate for $ty {
            fn test(&mut self, entry: &DirEntry) -> bool {
                self.matches(entry)
            }
        }

        impl<S: Selector + 'static> BitOr<S> for $ty {
            type Output = SelectAny;
            fn bitor(self, rhs: S) -> SelectAny {
                self.or(rhs)
            }
        }
    )*};
}

selector_glue!(SelectNames, SelectGlob, SelectRegex, SelectAny);

/// Names beginning with a period.
pub fn select_dots() -> SelectGlob {
    SelectGlob {
        pattern: ".*".to_string(),
        matcher: glob_matcher(".*"),
    }
}

/// Version control metadata directories.
pub fn select_vcs_dirs() -> SelectNames {
    SelectNames::new([".git", ".hg", "_darcs", ".bzr", ".svn", "_svn", "CVS", "RCS"])
}

/// Version control bookkeeping files, including RCS `,v` files.
pub fn select_vcs_files() -> SelectAny {
    let names = SelectNames::new([
        ".gitattributes",
        ".gitignore",
        ".gitmodules",
        ".mailmap",
        ".hgignore",
        ".hgsigs",
        ".hgtags",
        ".binaries",
        ".boring",
        ".bzrignore",
    ]);
    let rcs = SelectGlob {
        pattern: "?*,v".to_string(),
        matcher: glob_matcher("?*,v"),
    };
    names | rcs
}

/// Everything matched by [`select_vcs_dirs`] or [`select_vcs_files`].
pub fn select_vcs() -> SelectAny {
    select_vcs_dirs() | select_vcs_files()
}

// Only for the fixed patterns above, which always compile.
fn glob_matcher(pattern: &str) -> GlobMatcher {
    match compile_glob(pattern) {
        Ok(matcher) => matcher,
        Err(e) => unreachable!("built-in glob {pattern:?} failed to compile: {e}"),
    }
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    let glob = GlobBuilder::new(&literal_braces(pattern))
        .backslash_escape(false)
        .build()?;
    Ok(glob.compile_matcher())
}

/// Wraps `{` and `}` outside character classes in a class of their own so
/// globset does not read them as alternation.
fn literal_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut in_class = false;
    let mut class_start = false;
    for c in pattern.chars() {
        if in_class {
            out.push(c);
            if class_start && c == '!' {
                continue;
            }
            if c == ']' && !class_start {
                in_class = false;
            }
            class_start = false;
            continue;
        }
        match c {
            '[' => {
                in_class = true;
                class_start = true;
                out.push('[');
            }
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            _ => out.push(c),
        }
    }
    out
}
