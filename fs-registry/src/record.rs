use serde::Serialize;

use data_id::FileId;

/// One file discovered under a configured root directory.
///
/// Records are created by scans and replaced whole; the fields are private
/// so the mapping between path, identifier and URL can only change through
/// [`Registry`](crate::Registry) operations.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct FileRecord {
    /// The name of the root directory the file was found under
    #[serde(rename = "dir")]
    namespace: String,
    /// The identifier derived from namespace and relative path
    #[serde(rename = "hash")]
    id: FileId,
    /// The file's path relative to its root, `/`-separated
    #[serde(rename = "path")]
    relative_path: String,
    /// The public URL of the file
    url: String,
}

impl FileRecord {
    /// Create the record for `relative_path` under the root named
    /// `namespace`.
    ///
    /// Path separators are normalized to `/` so that identifiers are
    /// stable across host operating systems.
    pub(crate) fn new(
        namespace: &str,
        relative_path: &str,
        url_prefix: &str,
    ) -> Self {
        let relative_path = relative_path.replace('\\', "/");
        let id = FileId::compute(namespace, &relative_path);
        let url = format!("{}{}", url_prefix, id);

        FileRecord {
            namespace: namespace.to_string(),
            id,
            relative_path,
            url,
        }
    }

    /// Return the name of the root directory the file was found under
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Return the path of the file, relative to its root
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Return the identifier of the file
    pub fn id(&self) -> &FileId {
        &self.id
    }

    /// Return the public URL of the file
    pub fn url(&self) -> &str {
        &self.url
    }
}
