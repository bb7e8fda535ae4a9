#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the arduino-guard binary.
#[macro_export]
macro_rules! arduino_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("arduino-guard"))
    };
}

/// Docs README line that links to the documentation folder.
pub const README_LINK: &str =
    "📖 For more information about this library please read the documentation [here](./docs/)";

/// Creates a temporary library directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A library with `library.properties` and a config that points the style
    /// check at a formatter that does not exist, so brace wrapping is skipped.
    pub fn library(properties: &str) -> Self {
        let fixture = Self::new();
        fixture.create_file("library.properties", properties);
        fixture.create_config("[style]\ncommand = \"arduino-guard-missing-formatter\"\n");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates an arduino-guard config file in the library root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".arduino-guard.toml", content);
    }

    /// Creates a documentation tree that satisfies every documentation check.
    pub fn create_complete_docs(&self) {
        self.create_file("README.md", &format!("# Library\n\n{README_LINK}\n"));
        self.create_file(
            "docs/README.md",
            "# Features\n\n# Usage\n\n# API\n\n# License\n",
        );
        self.create_file("docs/api.md", "# API\n");
        self.create_dir("docs/assets");
    }
}
