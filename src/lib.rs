//! # Depthwalk
//!
//! `depthwalk` walks a directory tree depth-first and hands back its files and
//! directories one path at a time. The walk is an ordinary [`Iterator`]: it is
//! lazy, can be paused between pulls for as long as the caller likes, and keeps
//! only one open directory handle per level of nesting.
//!
//! Directories can be yielded before their contents (pre-order, the default)
//! or after them (post-order). Each directory level can be sorted on its own,
//! entries can be filtered separately for directories and files, symlinks to
//! directories can be followed, and unreadable directories are reported to a
//! callback that decides whether to skip them or stop.
//!
//! Dropping a [`Walk`] or calling [`Walk::close`] releases every directory
//! handle it still holds.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use depthwalk::{DirEntry, WalkBuilder};
//! use depthwalk::select::select_vcs_dirs;
//!
//! let walk = WalkBuilder::new("src")
//!     .sort(true)
//!     .exclude_dirs(select_vcs_dirs())
//!     .filter_files(|e: &DirEntry| e.path().extension().is_some_and(|x| x == "rs"))
//!     .on_error(Err)
//!     .build()
//!     .expect("valid configuration");
//!
//! for path in walk {
//!     let path = path.expect("readable tree");
//!     println!("{}", path.display());
//! }
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
pub mod select;
mod sort;
mod types;

pub use engine::{Walk, walk};
pub use error::WalkError;
pub use options::{WalkBuilder, WalkOptions};
pub use types::{Comparator, DirEntry, EntryPredicate, ErrorHandler};
