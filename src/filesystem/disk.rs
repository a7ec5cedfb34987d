use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::debug;

use super::Filesystem;

#[derive(Debug, Default)]
pub struct DiskFilesystem;

impl Filesystem for DiskFilesystem {
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        debug!("Creating directory {}", path.display());
        fs::create_dir_all(path)
    }

    fn create_empty_file(&mut self, path: &Path) -> io::Result<()> {
        debug!("Creating file {}", path.display());
        File::create(path).map(drop)
    }
}
