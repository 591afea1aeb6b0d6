use std::collections::BTreeSet;

/// In-memory index of file names known to exist in the space, with
/// incremental update support.
///
/// The host's sync engine owns this: it inserts and removes entries as files
/// appear and disappear, and flips `full_sync_completed` once the first
/// complete listing has been received. Until that flip, existence checks are
/// optimistic so links don't flash as missing while the index fills up.
///
/// Uses BTreeSet for automatic sorted ordering by name.
#[derive(Debug, Default, Clone)]
pub struct SpaceIndex {
    files: BTreeSet<String>,
    full_sync_completed: bool,
}

impl SpaceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a complete listing, marking the sync as done.
    pub fn from_files(files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            full_sync_completed: true,
        }
    }

    /// Add a single file name to the index.
    pub fn insert(&mut self, file_name: impl Into<String>) {
        self.files.insert(file_name.into());
    }

    /// Remove a file name from the index. Returns true if it was present.
    pub fn remove(&mut self, file_name: &str) -> bool {
        self.files.remove(file_name)
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// All known file names, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// Whether the initial full listing has been received.
    pub fn full_sync_completed(&self) -> bool {
        self.full_sync_completed
    }

    pub fn mark_synced(&mut self) {
        self.full_sync_completed = true;
    }

    /// Checks whether a resolved page identifier matches a known file,
    /// case-insensitively and ignoring a trailing `.md` on index entries
    /// (entries carry the extension, resolved references don't).
    pub fn contains_page(&self, page: &str) -> bool {
        let needle = page.to_lowercase();
        self.files.iter().any(|file_name| {
            let lower = file_name.to_lowercase();
            lower.strip_suffix(".md").unwrap_or(&lower) == needle
        })
    }
}

/// Predicate for pages that are materialized dynamically by an extension
/// rather than stored as files.
pub trait DynamicPages {
    fn is_likely_handled(&self, page: &str) -> bool;
}

/// Null predicate for hosts without dynamically-generated pages.
pub struct NoDynamicPages;

impl DynamicPages for NoDynamicPages {
    fn is_likely_handled(&self, _page: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_index_is_empty_and_unsynced() {
        let index = SpaceIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(!index.full_sync_completed());
    }

    #[test]
    fn from_files_marks_synced() {
        let index = SpaceIndex::from_files(["a.md", "b.md"]);
        assert_eq!(index.len(), 2);
        assert!(index.full_sync_completed());
    }

    #[test]
    fn insert_and_remove() {
        let mut index = SpaceIndex::new();
        index.insert("Notes/Index.md");
        assert_eq!(index.len(), 1);
        assert!(index.remove("Notes/Index.md"));
        assert!(!index.remove("Notes/Index.md"));
        assert!(index.is_empty());
    }

    #[test]
    fn iteration_is_sorted() {
        let index = SpaceIndex::from_files(["b.md", "a.md", "c.md"]);
        let names: Vec<_> = index.iter().collect();
        assert_eq!(names, ["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn contains_page_strips_md_suffix() {
        let index = SpaceIndex::from_files(["Projects/Alpha.md"]);
        assert!(index.contains_page("Projects/Alpha"));
        assert!(!index.contains_page("Projects/Alpha.md"));
    }

    #[test]
    fn contains_page_is_case_insensitive() {
        let index = SpaceIndex::from_files(["Projects/Alpha.md"]);
        assert!(index.contains_page("projects/alpha"));
        assert!(index.contains_page("PROJECTS/ALPHA"));
    }

    #[test]
    fn contains_page_ignores_other_extensions() {
        let index = SpaceIndex::from_files(["image.png"]);
        assert!(!index.contains_page("image"));
        assert!(index.contains_page("image.png"));
    }
}
