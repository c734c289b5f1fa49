//! Discovery of sketch input files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Recursively collects all `*.bsb` files under a directory, sorted for a
/// deterministic batch order.
pub(crate) fn bsb_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(&path, files)?;
        } else if has_bsb_extension(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Whether a path carries the `bsb` sketch extension.
pub(crate) fn has_bsb_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("bsb")
}
