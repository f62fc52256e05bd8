use crate::types::{Comparator, DirEntry};

/// Orders one directory level's entries once they have been drained.
pub(crate) struct Sorter {
    compare: Comparator,
    reverse: bool,
}

impl Sorter {
    pub(crate) fn new(compare: Option<Comparator>, reverse: bool) -> Self {
        Self {
            compare: compare.unwrap_or_else(|| Box::new(by_name) as Comparator),
            reverse,
        }
    }

    /// Stable sort; entries comparing equal keep scan order even when reversed.
    pub(crate) fn sort(&mut self, entries: &mut [DirEntry]) {
        let compare = &mut self.compare;
        let reverse = self.reverse;
        entries.sort_by(|a, b| {
            let ord = compare(a, b);
            if reverse { ord.reverse() } else { ord }
        });
    }
}

fn by_name(a: &DirEntry, b: &DirEntry) -> std::cmp::Ordering {
    a.file_name().cmp(b.file_name())
}
