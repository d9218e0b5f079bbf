//! # File I/O Module
//!
//! Handles project file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **File locking**: Prevent concurrent edits on shared drives
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Projects are saved as `.tcf` (TileCalc) files containing JSON.
//! Lock files use `.tcf.lock` extension with metadata about who holds the
//! lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tile_core::file_io::{save_project, load_project, FileLock};
//! use tile_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("jane@tiling.example");
//! let path = Path::new("kitchen.tcf");
//!
//! // Acquire lock before saving
//! let lock = FileLock::acquire(path, "jane@tiling.example")?;
//!
//! // Save with atomic write
//! save_project(&project, path)?;
//!
//! // Lock is released when dropped
//! drop(lock);
//! # Ok::<(), tile_core::errors::TileError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{TileError, TileResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Lock file metadata stored in .tcf.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

/// Get the hostname of the current machine
fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Uses both:
/// 1. OS-level file locking (via fs2) for process safety
/// 2. .lock file with metadata for user visibility
pub struct FileLock {
    /// Path to the main project file
    project_path: PathBuf,
    /// Path to the lock file
    lock_path: PathBuf,
    /// The underlying file handle (keeps OS lock)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a project file.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired successfully
    /// * `Err(TileError::FileLocked)` - Another process holds the lock
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> TileResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        // A live lock file means someone else is editing; stale locks
        // (dead process or > 24 h old) may be taken over.
        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(TileError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                TileError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        // Non-blocking exclusive OS lock
        lock_file.try_lock_exclusive().map_err(|_| {
            TileError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json = serde_json::to_string_pretty(&info)
            .map_err(|e| TileError::SerializationError {
                reason: e.to_string(),
            })?;

        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            TileError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;

        lock_file.sync_all().map_err(|e| {
            TileError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            project_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check if a file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if locked, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !is_lock_stale(&info) {
                    return Some(info);
                }
            }
        }
        None
    }

    /// Get the path to the project file
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Remove the lock file; the OS lock releases with the handle
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// Get the lock file path for a project file
fn lock_path_for(project_path: &Path) -> PathBuf {
    let mut lock_path = project_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

/// Read lock info from a lock file
fn read_lock_info(lock_path: &Path) -> TileResult<LockInfo> {
    let mut file = File::open(lock_path).map_err(|e| {
        TileError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        TileError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| TileError::SerializationError {
        reason: e.to_string(),
    })
}

/// Check if a lock is stale (its process has exited, or it is over a day old)
fn is_lock_stale(info: &LockInfo) -> bool {
    #[cfg(unix)]
    {
        if let Some(our_machine) = hostname() {
            if info.machine == our_machine
                && fs::metadata(format!("/proc/{}", info.pid)).is_err()
            {
                return true;
            }
        }
    }

    let age = Utc::now() - info.locked_at;
    age.num_hours() > 24
}

/// Save a project to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize project to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp to .tcf (atomic on most filesystems)
///
/// This prevents corruption if the process is interrupted during write.
pub fn save_project(project: &Project, path: &Path) -> TileResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| TileError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("tcf.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        TileError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        TileError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        TileError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        TileError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(TileError::VersionMismatch)` - File version is incompatible
/// * `Err(TileError::SerializationError)` - Invalid JSON
/// * `Err(TileError::FileError)` - I/O error
pub fn load_project(path: &Path) -> TileResult<Project> {
    let mut file = File::open(path)
        .map_err(|e| TileError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| TileError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project =
        serde_json::from_str(&contents).map_err(|e| TileError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    Ok(project)
}

/// Load a project, returning whether it's read-only due to a lock.
///
/// # Returns
///
/// * `Ok((Project, None))` - Loaded successfully, no lock
/// * `Ok((Project, Some(LockInfo)))` - Loaded, but another user has the lock
/// * `Err(_)` - Failed to load
pub fn load_project_with_lock_check(path: &Path) -> TileResult<(Project, Option<LockInfo>)> {
    let project = load_project(path)?;
    let lock_info = FileLock::check(path);
    Ok((project, lock_info))
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> TileResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(TileError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(TileError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // For 0.x versions, a newer minor version is a breaking change
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(TileError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{CalculationInput, Pattern};
    use tempfile::tempdir;

    fn sample_project() -> Project {
        let mut project = Project::new("jane@tiling.example");
        project
            .add_calculation(
                "Kitchen",
                CalculationInput {
                    room_length_m: 5.0,
                    room_width_m: 4.0,
                    tile_length_cm: 30.0,
                    tile_width_cm: 30.0,
                    spacing_mm: 2.0,
                    pattern: Pattern::Grid,
                },
            )
            .unwrap();
        project
    }

    #[test]
    fn test_lock_path_generation() {
        let project_path = Path::new("/path/to/kitchen.tcf");
        let lock_path = lock_path_for(project_path);
        assert_eq!(lock_path, Path::new("/path/to/kitchen.tcf.lock"));
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("test@example.com");
        assert_eq!(info.user_id, "test@example.com");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.tcf");

        let project = sample_project();
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.owner, "jane@tiling.example");
        assert_eq!(loaded.item_count(), 1);

        // every result field round-trips unchanged
        let (id, saved) = project.items.iter().next().unwrap();
        assert_eq!(loaded.items[id].results, saved.results);
        assert_eq!(loaded.items[id].input, saved.input);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atomic.tcf");
        let tmp_path = path.with_extension("tcf.tmp");

        save_project(&sample_project(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("locked.tcf");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "test@example.com").unwrap();
        assert_eq!(lock.info.user_id, "test@example.com");
        assert_eq!(lock.project_path(), path.as_path());

        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());

        // different major fails
        assert!(validate_version("1.0.0").is_err());

        // newer minor (in 0.x) fails
        assert!(validate_version("0.2.0").is_err());

        // garbage fails
        assert!(validate_version("not-a-version").is_err());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.tcf");
        fs::write(&path, "{ not json").unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_with_lock_check() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checked.tcf");
        save_project(&sample_project(), &path).unwrap();

        let (loaded, lock_info) = load_project_with_lock_check(&path).unwrap();
        assert_eq!(loaded.item_count(), 1);
        assert!(lock_info.is_none());
    }
}
