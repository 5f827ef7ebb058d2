use std::path::{Component, Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The resolved path escapes the document root (maps to 403)
    Forbidden,
    /// No regular file exists at the resolved path (maps to 404)
    NotFound,
    /// The document root itself could not be canonicalized (maps to 500)
    Internal,
}

/// Resolves a root-relative request path to an absolute file location.
///
/// Containment is enforced twice: once on the lexically normalized join
/// (before any filesystem probing, so out-of-root paths leak nothing about
/// what exists there), and again on the canonicalized result so a symlink
/// inside the root cannot point outside it. Both checks compare whole path
/// components via [`Path::starts_with`], never raw string prefixes, so a
/// sibling directory like `root-evil` next to `root` is not confusable with
/// the root itself.
///
/// Beyond containment and the regular-file requirement there is no further
/// policy; permission bits and hidden files are not inspected.
pub async fn resolve(root: &Path, relative: &str) -> Result<PathBuf, ResolveError> {
    let canonical_root = fs::canonicalize(root)
        .await
        .map_err(|_| ResolveError::Internal)?;

    let candidate = normalize(&canonical_root.join(relative));
    if !candidate.starts_with(&canonical_root) {
        return Err(ResolveError::Forbidden);
    }

    let resolved = match fs::canonicalize(&candidate).await {
        Ok(p) => p,
        Err(_) => return Err(ResolveError::NotFound),
    };
    if !resolved.starts_with(&canonical_root) {
        return Err(ResolveError::Forbidden);
    }

    match fs::metadata(&resolved).await {
        Ok(meta) if meta.is_file() => Ok(resolved),
        _ => Err(ResolveError::NotFound),
    }
}

/// Collapses `.` and `..` segments without touching the filesystem.
///
/// A `..` at the top of the stack pops nothing, so a path that climbs above
/// the root simply fails the containment check afterwards.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dot_segments() {
        let p = normalize(Path::new("/srv/root/./sub/../file.html"));
        assert_eq!(p, PathBuf::from("/srv/root/file.html"));
    }

    #[test]
    fn normalize_keeps_escapes_visible() {
        let p = normalize(Path::new("/srv/root/../../etc/passwd"));
        assert_eq!(p, PathBuf::from("/etc/passwd"));
    }
}
