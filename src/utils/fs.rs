//! File system utilities.
//!
//! Works never touch the file system directly: they ask a [`FileProbe`],
//! so tests can swap in an in-memory view of which paths exist.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

/// Environment predicate over file locations.
pub trait FileProbe {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` is an existing regular file that can be opened for reading.
    fn is_readable_file(&self, path: &Path) -> bool;

    /// Whether a Movie may be constructed over `path`: it must either not
    /// exist yet or be a regular file.
    fn accepts_media_path(&self, path: &Path) -> bool {
        !self.exists(path) || self.is_file(path)
    }
}

/// Probe backed by the real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_readable_file(&self, path: &Path) -> bool {
        path.is_file() && std::fs::File::open(path).is_ok()
    }
}

/// Shared handle to a probe, held by every work that needs validity checks.
#[derive(Clone)]
pub struct ProbeHandle(Rc<dyn FileProbe>);

impl ProbeHandle {
    pub fn new<P: FileProbe + 'static>(probe: P) -> Self {
        Self(Rc::new(probe))
    }
}

impl Default for ProbeHandle {
    fn default() -> Self {
        Self::new(FsProbe)
    }
}

impl std::ops::Deref for ProbeHandle {
    type Target = dyn FileProbe;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for ProbeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProbeHandle")
    }
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check if a file is a video file based on extension.
pub fn is_video_file(path: &Path) -> bool {
    const VIDEO_EXTENSIONS: &[&str] = &[
        "mkv", "mp4", "avi", "mov", "wmv", "m4v", "ts", "m2ts", "flv", "webm", "mpg", "mpeg",
    ];

    get_extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Turn a file name like `The.Matrix.1999.mkv` into a display title.
pub fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().replace(['.', '_'], " "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| path.display().to_string())
}
