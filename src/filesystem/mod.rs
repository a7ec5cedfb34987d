//! Filesystem collaborator used by the tree builder.
//!
//! The builder only ever needs two capabilities: create a directory with all
//! of its missing parents, and create an empty file. [`DiskFilesystem`]
//! performs them for real, [`DryRunFilesystem`] only prints what would
//! happen.

mod disk;
mod dry_run;

use std::io;
use std::path::Path;

pub use disk::DiskFilesystem;
pub use dry_run::DryRunFilesystem;

pub trait Filesystem {
    /// Creates `path` and any missing ancestors. Succeeds if it already exists.
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()>;

    /// Creates an empty file at `path`, truncating one that already exists.
    fn create_empty_file(&mut self, path: &Path) -> io::Result<()>;
}
