//! Directory listing backends.

use std::io;
use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use fanscan_core::ScanConfig;

/// One-level directory listing capability used by scan units.
///
/// Both listing operations return entries in the order the backend yields
/// them; no sorting is implied.
pub trait DirectoryLister: Send + Sync {
    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Immediate subdirectories of `path`.
    fn list_subdirectories(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Immediate files of `path`.
    fn list_files(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Lister backed by a single-level, serial jwalk traversal.
///
/// Parallelism comes from running one scan unit per root, so each listing
/// stays on the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct JwalkLister {
    include_hidden: bool,
    follow_symlinks: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Wanted {
    Dirs,
    Files,
}

impl JwalkLister {
    /// Create a lister that includes hidden entries and does not follow symlinks.
    pub fn new() -> Self {
        Self {
            include_hidden: true,
            follow_symlinks: false,
        }
    }

    /// Create a lister honouring the listing options of `config`.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            include_hidden: config.include_hidden,
            follow_symlinks: config.follow_symlinks,
        }
    }

    fn list(&self, path: &Path, wanted: Wanted) -> io::Result<Vec<PathBuf>> {
        let walker = WalkDir::new(path)
            .parallelism(Parallelism::Serial)
            .skip_hidden(!self.include_hidden)
            .follow_links(self.follow_symlinks)
            .sort(false)
            .min_depth(0)
            .max_depth(1);

        let mut paths = Vec::new();
        for entry_result in walker {
            let entry = entry_result.map_err(|e| into_io_error(&e))?;
            // jwalk attaches a failed read of `path` to its depth-0 entry.
            if entry.depth() == 0 {
                if let Some(err) = &entry.read_children_error {
                    return Err(into_io_error(err));
                }
                continue;
            }
            let file_type = entry.file_type();
            let keep = match wanted {
                Wanted::Dirs => file_type.is_dir(),
                Wanted::Files => file_type.is_file(),
            };
            if keep {
                paths.push(entry.path());
            }
        }

        Ok(paths)
    }
}

impl Default for JwalkLister {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryLister for JwalkLister {
    fn list_subdirectories(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        self.list(path, Wanted::Dirs)
    }

    fn list_files(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        self.list(path, Wanted::Files)
    }
}

fn into_io_error(err: &jwalk::Error) -> io::Error {
    let kind = err
        .io_error()
        .map(io::Error::kind)
        .unwrap_or(io::ErrorKind::Other);
    io::Error::new(kind, err.to_string())
}
