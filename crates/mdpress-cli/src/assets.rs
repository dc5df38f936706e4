//! Static asset handling: the public directory is cleared and rebuilt from
//! the static directory on every run, so a build always starts from a clean
//! slate. Running it twice yields the same final state.

use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::Path;

/// Clears `public_dir` and repopulates it with a recursive copy of
/// `static_dir`.
pub fn sync_static(static_dir: &Path, public_dir: &Path) -> Result<()> {
    ensure!(
        static_dir.exists(),
        "static directory {} does not exist",
        static_dir.display()
    );

    if public_dir.exists() {
        fs::remove_dir_all(public_dir)
            .with_context(|| format!("clearing {}", public_dir.display()))?;
    }
    fs::create_dir_all(public_dir)
        .with_context(|| format!("creating {}", public_dir.display()))?;

    copy_tree(static_dir, public_dir)
}

fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    for entry in fs::read_dir(from).with_context(|| format!("reading {}", from.display()))? {
        let entry = entry?;
        let source = entry.path();
        let dest = to.join(entry.file_name());

        if source.is_dir() {
            fs::create_dir_all(&dest)
                .with_context(|| format!("creating {}", dest.display()))?;
            copy_tree(&source, &dest)?;
        } else {
            log::debug!("copying {} -> {}", source.display(), dest.display());
            fs::copy(&source, &dest)
                .with_context(|| format!("copying {}", source.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_nested_tree() {
        let root = TempDir::new().unwrap();
        let static_dir = root.path().join("static");
        let public_dir = root.path().join("public");
        fs::create_dir_all(static_dir.join("css")).unwrap();
        fs::write(static_dir.join("index.css"), "body {}").unwrap();
        fs::write(static_dir.join("css/extra.css"), "p {}").unwrap();

        sync_static(&static_dir, &public_dir).unwrap();

        assert_eq!(
            fs::read_to_string(public_dir.join("index.css")).unwrap(),
            "body {}"
        );
        assert_eq!(
            fs::read_to_string(public_dir.join("css/extra.css")).unwrap(),
            "p {}"
        );
    }

    #[test]
    fn clears_stale_output() {
        let root = TempDir::new().unwrap();
        let static_dir = root.path().join("static");
        let public_dir = root.path().join("public");
        fs::create_dir_all(&static_dir).unwrap();
        fs::create_dir_all(&public_dir).unwrap();
        fs::write(public_dir.join("stale.html"), "old").unwrap();

        sync_static(&static_dir, &public_dir).unwrap();

        assert!(!public_dir.join("stale.html").exists());
        assert!(public_dir.exists());
    }

    #[test]
    fn running_twice_is_idempotent() {
        let root = TempDir::new().unwrap();
        let static_dir = root.path().join("static");
        let public_dir = root.path().join("public");
        fs::create_dir_all(&static_dir).unwrap();
        fs::write(static_dir.join("a.txt"), "a").unwrap();

        sync_static(&static_dir, &public_dir).unwrap();
        sync_static(&static_dir, &public_dir).unwrap();

        assert_eq!(fs::read_to_string(public_dir.join("a.txt")).unwrap(), "a");
        assert_eq!(fs::read_dir(&public_dir).unwrap().count(), 1);
    }

    #[test]
    fn missing_static_dir_is_an_error() {
        let root = TempDir::new().unwrap();
        let result = sync_static(&root.path().join("nope"), &root.path().join("public"));
        assert!(result.is_err());
    }
}
