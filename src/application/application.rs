use std::fs;
use std::io;
use std::path::PathBuf;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info_span};

use crate::application::{InputSource, RuntimeConfig};
use crate::filesystem::{DiskFilesystem, DryRunFilesystem, Filesystem};
use crate::tree::{MaterializeError, MaterializeSummary, TreeBuilder};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<MaterializeSummary, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let _span = info_span!("retree", root = %app_config.root.display()).entered();
        debug!("Runtime config: {:?}", app_config);

        let drawing = Self::read_input(&app_config.input)?;
        debug!("Read {} bytes of tree drawing", drawing.len());

        if app_config.dry_run {
            Self::materialize(&app_config, &drawing, &mut DryRunFilesystem::stdout())
        } else {
            Self::materialize(&app_config, &drawing, &mut DiskFilesystem)
        }
    }

    /// Applies the drawing under the configured root using `filesystem`.
    pub fn materialize(
        app_config: &RuntimeConfig,
        drawing: &str,
        filesystem: &mut impl Filesystem,
    ) -> Result<MaterializeSummary, ApplicationError> {
        TreeBuilder::new(&app_config.root, app_config.indent, filesystem)
            .materialize(drawing.lines())
            .context(MaterializationSnafu)
    }

    fn read_input(input: &InputSource) -> Result<String, ApplicationError> {
        match input {
            InputSource::Stdin => {
                debug!("Reading tree drawing from stdin");
                io::read_to_string(io::stdin()).context(ReadStdinSnafu)
            }
            InputSource::File(path) => {
                debug!("Reading tree drawing from {}", path.display());
                fs::read_to_string(path).context(ReadInputFileSnafu { path: path.clone() })
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to read the tree drawing from stdin"))]
    ReadStdinError { source: io::Error },
    #[snafu(display("Failed to read the tree drawing from {}", path.display()))]
    ReadInputFileError { path: PathBuf, source: io::Error },
    #[snafu(display("Critical failure encountered while materializing the tree"))]
    MaterializationError { source: MaterializeError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data::IndentStrategy;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn config(input: InputSource, root: &std::path::Path) -> RuntimeConfig {
        RuntimeConfig {
            input,
            root: root.to_path_buf(),
            indent: IndentStrategy::Glyphs,
            dry_run: false,
        }
    }

    #[test]
    fn run_reads_drawing_from_file() {
        let root = TempDir::new().expect("Failed to create temp directory");
        let mut drawing = NamedTempFile::new().expect("Failed to create temp file");
        write!(drawing, "src/\n├── main.rs\n└── lib.rs\n").expect("Failed to write drawing");

        let summary = Application::run(config(
            InputSource::File(drawing.path().to_path_buf()),
            root.path(),
        ))
        .expect("Run should succeed");

        assert_eq!(summary.directories, 1);
        assert_eq!(summary.files, 2);
        assert!(root.path().join("src/main.rs").is_file());
        assert!(root.path().join("src/lib.rs").is_file());
    }

    #[test]
    fn run_uses_column_strategy_when_configured() {
        let root = TempDir::new().expect("Failed to create temp directory");
        let mut drawing = NamedTempFile::new().expect("Failed to create temp file");
        write!(drawing, "src/\n└── util/\n    └── helper.go\n").expect("Failed to write drawing");
        let mut app_config = config(
            InputSource::File(drawing.path().to_path_buf()),
            root.path(),
        );
        app_config.indent = IndentStrategy::Columns;

        Application::run(app_config).expect("Run should succeed");

        assert!(root.path().join("src/util/helper.go").is_file());
    }

    #[test]
    fn run_dry_run_leaves_disk_untouched() {
        let root = TempDir::new().expect("Failed to create temp directory");
        let mut drawing = NamedTempFile::new().expect("Failed to create temp file");
        write!(drawing, "ghost/\n│   file.txt\n").expect("Failed to write drawing");
        let mut app_config = config(
            InputSource::File(drawing.path().to_path_buf()),
            root.path(),
        );
        app_config.dry_run = true;

        let summary = Application::run(app_config).expect("Dry run should succeed");

        assert_eq!(summary.directories, 1);
        assert_eq!(summary.files, 1);
        assert!(!root.path().join("ghost").exists());
    }

    #[test]
    fn missing_input_file_is_reported() {
        let root = TempDir::new().expect("Failed to create temp directory");
        let missing = root.path().join("no-such-drawing.txt");

        let result = Application::run(config(InputSource::File(missing.clone()), root.path()));

        match result {
            Err(ApplicationError::ReadInputFileError { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected ReadInputFileError, got {other:?}"),
        }
    }

    #[test]
    fn non_utf8_input_is_a_read_error() {
        let root = TempDir::new().expect("Failed to create temp directory");
        let mut drawing = NamedTempFile::new().expect("Failed to create temp file");
        drawing
            .write_all(&[0xff, 0xfe, b'\n'])
            .expect("Failed to write drawing");

        let result = Application::run(config(
            InputSource::File(drawing.path().to_path_buf()),
            root.path(),
        ));

        assert!(matches!(
            result,
            Err(ApplicationError::ReadInputFileError { .. })
        ));
    }

    #[test]
    fn filesystem_failure_is_wrapped() {
        let root = TempDir::new().expect("Failed to create temp directory");
        let app_config = config(InputSource::Stdin, &root.path().join("missing-root"));

        let result = Application::materialize(&app_config, "orphan.txt", &mut DiskFilesystem);

        assert!(matches!(
            result,
            Err(ApplicationError::MaterializationError {
                source: MaterializeError::CreateFileError { .. }
            })
        ));
    }

    #[test]
    fn materialize_tolerates_crlf_line_endings() {
        let root = TempDir::new().expect("Failed to create temp directory");
        let app_config = config(InputSource::Stdin, root.path());

        Application::materialize(&app_config, "dir/\r\n│   file.txt\r\n", &mut DiskFilesystem)
            .expect("Materialize should succeed");

        assert!(root.path().join("dir/file.txt").is_file());
    }

    #[test]
    fn error_messages_name_the_input() {
        let error = ApplicationError::ReadInputFileError {
            path: PathBuf::from("/drawings/tree.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };

        assert!(error.to_string().contains("/drawings/tree.txt"));
    }
}
