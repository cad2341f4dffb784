//!
//! The harness scaffolder library.
//!

pub(crate) mod merger;
pub(crate) mod scaffold;
pub(crate) mod selection;
pub(crate) mod settings;
pub(crate) mod splice;

use std::path::Path;
use std::path::PathBuf;

pub use self::merger::Merger;
pub use self::scaffold::Scaffold;
pub use self::selection::load_selection;
pub use self::settings::Settings;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The harness directory components relative to the project root.
pub const HARNESS_DIRECTORY: &[&str] = &["test", "fuzzing"];

/// The proxies subdirectory name inside the harness directory.
pub const PROXIES_DIRECTORY: &str = "proxies";

/// The utilities subdirectory name inside the harness directory.
pub const UTILS_DIRECTORY: &str = "utils";

/// The handlers file name.
pub const HANDLERS_FILE_NAME: &str = "Handlers.sol";

/// The base file name.
pub const BASE_FILE_NAME: &str = "Base.sol";

///
/// Returns the harness directory path for the specified project root.
///
pub fn harness_directory(project_directory: &Path) -> PathBuf {
    HARNESS_DIRECTORY
        .iter()
        .fold(project_directory.to_path_buf(), |path, part| {
            path.join(part)
        })
}
