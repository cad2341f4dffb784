//!
//! The scaffold template file descriptor.
//!

///
/// The scaffold template file descriptor.
///
pub struct TemplateFile {
    /// The file name.
    pub name: &'static str,
    /// The file content, embedded at compile time.
    pub content: &'static str,
    /// The harness subdirectory the file lands in, if any.
    pub subdirectory: Option<&'static str>,
    /// Whether the file is listed for user review after creation.
    pub open_on_create: bool,
    /// Whether the file lands in the project root instead of the harness
    /// directory.
    pub in_project_root: bool,
}

impl TemplateFile {
    ///
    /// A shortcut constructor for a harness-directory file.
    ///
    pub fn new(name: &'static str, content: &'static str, open_on_create: bool) -> Self {
        Self {
            name,
            content,
            subdirectory: None,
            open_on_create,
            in_project_root: false,
        }
    }

    ///
    /// A shortcut constructor for a subdirectory file.
    ///
    pub fn new_in_subdirectory(
        name: &'static str,
        content: &'static str,
        subdirectory: &'static str,
    ) -> Self {
        Self {
            name,
            content,
            subdirectory: Some(subdirectory),
            open_on_create: false,
            in_project_root: false,
        }
    }

    ///
    /// A shortcut constructor for a project-root file.
    ///
    pub fn new_in_project_root(name: &'static str, content: &'static str) -> Self {
        Self {
            name,
            content,
            subdirectory: None,
            open_on_create: false,
            in_project_root: true,
        }
    }
}
