//! Zip extraction for downloaded dataset archives.
//!
//! Kaggle serves datasets as a single zip archive; extraction preserves the
//! archive's directory structure under the output directory. Entries that
//! would resolve outside the output directory are rejected.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::{KaggleError, KaggleResult};

/// Extract every entry of the archive into `dest_dir`.
///
/// Returns the number of files extracted (directories are not counted).
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> KaggleResult<usize> {
    let file = File::open(archive_path).map_err(|e| KaggleError::io(archive_path, e))?;
    let mut archive = zip::ZipArchive::new(file)?;

    fs::create_dir_all(dest_dir).map_err(|e| KaggleError::io(dest_dir, e))?;

    let mut extracted = 0;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        // enclosed_name() is None for entries with `..` or absolute paths
        let Some(relative) = entry.enclosed_name() else {
            return Err(KaggleError::UnsafeArchiveEntry {
                entry: entry.name().to_string(),
            });
        };
        let dest_path = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&dest_path).map_err(|e| KaggleError::io(&dest_path, e))?;
            continue;
        }

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).map_err(|e| KaggleError::io(parent, e))?;
        }

        let mut dest_file = File::create(&dest_path).map_err(|e| KaggleError::io(&dest_path, e))?;
        io::copy(&mut entry, &mut dest_file).map_err(|e| KaggleError::io(&dest_path, e))?;
        extracted += 1;
    }

    Ok(extracted)
}

#[cfg(test)]
pub mod testing {
    use std::io::{Cursor, Write};
    use std::path::Path;

    use zip::write::SimpleFileOptions;

    /// Build zip archive bytes containing the given (name, contents) entries.
    ///
    /// Entry names ending in `/` become directory entries.
    pub fn archive_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        for (name, contents) in entries {
            if name.ends_with('/') {
                writer.add_directory(*name, options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(contents).unwrap();
            }
        }

        writer.finish().unwrap().into_inner()
    }

    /// Write a zip archive containing the given (name, contents) entries.
    pub fn write_archive(path: &Path, entries: &[(&str, &[u8])]) {
        std::fs::write(path, archive_bytes(entries)).unwrap();
    }
}
