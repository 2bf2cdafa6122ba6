use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use data_error::{Result, ServeError};

use crate::record::FileRecord;

/// Walk every configured root and produce the records of one snapshot.
///
/// Every non-directory entry is indexed; symlink handling is whatever the
/// walker does on the host. Any walk error aborts the whole scan, so a
/// partial snapshot is never returned.
pub(crate) fn scan_roots(
    roots: &BTreeMap<String, PathBuf>,
    url_prefix: &str,
) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();

    for (namespace, root) in roots {
        log::debug!("Scanning {:?} under namespace {:?}", root, namespace);

        for entry in WalkDir::new(root).min_depth(1) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            let relative_path = relative_to_root(entry.path(), root)?;
            records.push(FileRecord::new(
                namespace,
                &relative_path,
                url_prefix,
            ));
        }
    }

    log::debug!("Scan produced {} records", records.len());
    Ok(records)
}

/// Strip the root prefix from an entry path, as a UTF-8 string.
fn relative_to_root(path: &Path, root: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        ServeError::Path(format!(
            "{} is not under {}",
            path.display(),
            root.display()
        ))
    })?;

    relative
        .to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            ServeError::Path(format!(
                "{} is not valid unicode",
                relative.display()
            ))
        })
}
