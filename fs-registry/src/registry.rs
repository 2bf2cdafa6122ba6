use std::{collections::BTreeMap, fs, path::PathBuf};

use parking_lot::RwLock;

use data_error::{Result, ServeError};
use data_id::FileId;

use crate::{record::FileRecord, scan::scan_roots};

/// An index of every file under a set of named root directories, keyed by
/// stable path-derived identifiers.
///
/// [`Registry`] owns the current snapshot of [`FileRecord`]s and is the
/// only way to change it. Reads ([`Registry::list`], [`Registry::lookup`])
/// take the shared lock and may run from any number of threads at once.
/// Writers ([`Registry::rescan`], [`Registry::rename`]) do their
/// filesystem work with no lock held and take the exclusive lock only for
/// the moment the snapshot, or the single record, is swapped. Readers
/// therefore always observe a complete snapshot, never a partially
/// replaced one.
///
/// ## Examples
/// ```no_run
/// use std::{collections::BTreeMap, path::PathBuf};
/// use fs_registry::Registry;
///
/// let mut roots = BTreeMap::new();
/// roots.insert("docs".to_string(), PathBuf::from("path/to/docs"));
///
/// let registry = Registry::new(roots, "/f/").expect("Failed to scan roots");
/// for record in registry.list() {
///     println!("{} -> {}", record.relative_path(), record.url());
/// }
/// ```
pub struct Registry {
    /// Mapping of namespace name to root directory path
    roots: BTreeMap<String, PathBuf>,
    /// The prefix composed with each record's id to form its URL
    url_prefix: String,
    /// The current snapshot
    files: RwLock<Vec<FileRecord>>,
}

impl Registry {
    /// Create a registry over the given roots and perform the initial
    /// scan. Fails if any root cannot be walked.
    pub fn new(
        roots: BTreeMap<String, PathBuf>,
        url_prefix: &str,
    ) -> Result<Self> {
        let registry = Registry {
            roots,
            url_prefix: url_prefix.to_string(),
            files: RwLock::new(Vec::new()),
        };
        registry.rescan()?;

        Ok(registry)
    }

    /// Return the number of files in the current snapshot
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Return true if the current snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }

    /// Return the configured mapping of namespace names to root paths
    pub fn roots(&self) -> &BTreeMap<String, PathBuf> {
        &self.roots
    }

    /// Return a copy of the current snapshot.
    ///
    /// Record order is scan order and is not guaranteed to be stable
    /// across rescans.
    pub fn list(&self) -> Vec<FileRecord> {
        self.files.read().clone()
    }

    /// Look up a record by its identifier.
    ///
    /// Returns None if the current snapshot contains no file with the
    /// given id.
    pub fn lookup(&self, id: &FileId) -> Option<FileRecord> {
        self.files
            .read()
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Re-walk all roots and replace the snapshot whole.
    ///
    /// The walk runs with no lock held. On failure the previous snapshot
    /// stays in effect untouched.
    pub fn rescan(&self) -> Result<()> {
        let records = scan_roots(&self.roots, &self.url_prefix)?;
        *self.files.write() = records;

        Ok(())
    }

    /// Move the file identified by `id` to `new_relative_path` within its
    /// namespace root and replace its record in the snapshot.
    ///
    /// The filesystem is the source of truth and is mutated first: if the
    /// rename fails, the snapshot is unchanged and the file untouched. A
    /// failure between the two steps leaves the snapshot stale (pointing
    /// at the old path), never pointing at a path that does not exist;
    /// staleness is resolved by the next successful [`Registry::rescan`].
    ///
    /// Returns the new record. Its id and URL differ from the old ones, so
    /// callers must not assume identifiers survive a rename.
    pub fn rename(
        &self,
        id: &FileId,
        new_relative_path: &str,
    ) -> Result<FileRecord> {
        let old = self
            .lookup(id)
            .ok_or_else(|| ServeError::NotFound(id.to_string()))?;
        let root = self.roots.get(old.namespace()).ok_or_else(|| {
            ServeError::Path(format!("unknown namespace: {}", old.namespace()))
        })?;

        let new =
            FileRecord::new(old.namespace(), new_relative_path, &self.url_prefix);

        log::debug!(
            "Renaming {:?} to {:?} in {:?}",
            old.relative_path(),
            new.relative_path(),
            root
        );
        fs::rename(
            root.join(old.relative_path()),
            root.join(new.relative_path()),
        )
        .map_err(ServeError::Rename)?;

        let mut files = self.files.write();
        if let Some(slot) =
            files.iter_mut().find(|record| record.id() == id)
        {
            *slot = new.clone();
        }
        // If the old id is gone, a rescan raced the rename and has already
        // published the file's new path.

        Ok(new)
    }

    /// Return the absolute path of a record's file on the host filesystem.
    ///
    /// Returns None if the record's namespace is not configured on this
    /// registry.
    pub fn full_path(&self, record: &FileRecord) -> Option<PathBuf> {
        self.roots
            .get(record.namespace())
            .map(|root| root.join(record.relative_path()))
    }
}
