//! Directory traversal producing conversion jobs.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::LibraryConfig;

use super::error::ScanError;
use super::types::{ConversionJob, LibraryScan, SkipReason, SkippedEntry};

/// Scans `input_root` and prepares one job per lossless track.
///
/// Entries are visited in directory listing order at every level, which is
/// not guaranteed to be sorted. Skipped entries are always recorded in the
/// returned [`LibraryScan`]; they are only logged when `verbose` is set.
pub async fn scan_library(
    input_root: &Path,
    output_root: &Path,
    library: &LibraryConfig,
    verbose: bool,
) -> Result<LibraryScan, ScanError> {
    let mut scan = LibraryScan::default();

    for artist_path in list_dir(input_root).await? {
        if !is_dir(&artist_path).await {
            skip(&mut scan, artist_path, SkipReason::NotADirectory, verbose);
            continue;
        }
        let artist = entry_name(&artist_path);
        debug!("Scanning artist {:?}", artist);

        for album_path in list_dir(&artist_path).await? {
            if !is_dir(&album_path).await {
                skip(&mut scan, album_path, SkipReason::NotADirectory, verbose);
                continue;
            }
            let album = entry_name(&album_path);

            for track_path in list_dir(&album_path).await? {
                if is_dir(&track_path).await
                    || !has_extension(&track_path, &library.input_extension)
                {
                    skip(&mut scan, track_path, SkipReason::InvalidFileType, verbose);
                    continue;
                }

                let Some(stem) = track_path.file_stem().map(OsStr::to_os_string) else {
                    skip(&mut scan, track_path, SkipReason::InvalidFileType, verbose);
                    continue;
                };

                let output_path =
                    output_path_for(output_root, &artist, &album, &stem, &library.output_extension);

                scan.jobs.push(ConversionJob {
                    artist: artist.to_string_lossy().into_owned(),
                    album: album.to_string_lossy().into_owned(),
                    track: stem.to_string_lossy().into_owned(),
                    input_path: track_path,
                    output_path,
                });
            }
        }
    }

    Ok(scan)
}

/// Computes `output_root/artist/album/<track>.<extension>`.
///
/// The extension is appended to the track stem rather than substituted, so
/// stems containing dots ("01. Intro") survive intact.
pub fn output_path_for(
    output_root: &Path,
    artist: impl AsRef<OsStr>,
    album: impl AsRef<OsStr>,
    track: impl AsRef<OsStr>,
    extension: &str,
) -> PathBuf {
    let mut file_name = OsString::from(track.as_ref());
    file_name.push(".");
    file_name.push(extension);
    output_root.join(artist.as_ref()).join(album.as_ref()).join(file_name)
}

/// Whether `path` ends in `.extension` (ASCII case-insensitive).
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

async fn list_dir(path: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut entries = tokio::fs::read_dir(path)
        .await
        .map_err(|e| ScanError::read_dir(path, e))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ScanError::read_dir(path, e))?
    {
        paths.push(entry.path());
    }
    Ok(paths)
}

// Follows symlinks, so linked artist and album directories are traversed.
async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

fn entry_name(path: &Path) -> OsString {
    path.file_name().map(OsStr::to_os_string).unwrap_or_default()
}

fn skip(scan: &mut LibraryScan, path: PathBuf, reason: SkipReason, verbose: bool) {
    if verbose {
        warn!("Ignored {} ({})", path.display(), reason);
    }
    scan.skipped.push(SkippedEntry { path, reason });
}
