//!
//! The scaffold initializer.
//!

pub mod file;


use std::fs;
use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;

use self::file::TemplateFile;

///
/// Returns the fixed template file set materialized into a fresh project.
///
pub fn template_files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new_in_project_root("echidna.yaml", include_str!("templates/echidna.yaml")),
        TemplateFile::new_in_project_root("medusa.json", include_str!("templates/medusa.json")),
        TemplateFile::new("README.md", include_str!("templates/README.md"), true),
        TemplateFile::new("Actor.sol", include_str!("templates/Actor.sol"), true),
        TemplateFile::new("Config.sol", include_str!("templates/Config.sol"), true),
        TemplateFile::new("Base.sol", include_str!("templates/Base.sol"), true),
        TemplateFile::new_in_subdirectory(
            "BaseProxy.sol",
            include_str!("templates/BaseProxy.sol"),
            crate::PROXIES_DIRECTORY,
        ),
        TemplateFile::new("Snapshots.sol", include_str!("templates/Snapshots.sol"), true),
        TemplateFile::new(
            "Properties.sol",
            include_str!("templates/Properties.sol"),
            true,
        ),
        TemplateFile::new("Handlers.sol", include_str!("templates/Handlers.sol"), true),
        TemplateFile::new(
            "FuzzTester.sol",
            include_str!("templates/FuzzTester.sol"),
            false,
        ),
        TemplateFile::new(
            "FoundryTester.sol",
            include_str!("templates/FoundryTester.sol"),
            false,
        ),
        TemplateFile::new_in_subdirectory(
            "Hevm.sol",
            include_str!("templates/Hevm.sol"),
            crate::UTILS_DIRECTORY,
        ),
        TemplateFile::new_in_subdirectory(
            "PropertiesHelper.sol",
            include_str!("templates/PropertiesHelper.sol"),
            crate::UTILS_DIRECTORY,
        ),
        TemplateFile::new_in_subdirectory(
            "Logger.sol",
            include_str!("templates/Logger.sol"),
            crate::UTILS_DIRECTORY,
        ),
        TemplateFile::new_in_subdirectory(
            "Deployer.sol",
            include_str!("templates/Deployer.sol"),
            crate::UTILS_DIRECTORY,
        ),
        TemplateFile::new_in_subdirectory(
            "DecimalPrinter.sol",
            include_str!("templates/DecimalPrinter.sol"),
            crate::UTILS_DIRECTORY,
        ),
    ]
}

///
/// The scaffold initializer.
///
/// Materializes the fixed template set into a project directory tree if and
/// only if the harness directory does not already exist or is empty, then
/// splices one import statement per known contract file path into the Base
/// file's import block.
///
pub struct Scaffold {
    /// The project root directory.
    project_directory: PathBuf,
}

impl Scaffold {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(project_directory: PathBuf) -> Self {
        Self { project_directory }
    }

    ///
    /// Creates the scaffold, skipping the whole operation when the harness
    /// directory already holds files, and skipping individual files that
    /// already exist. I/O failures on single files are reported and do not
    /// abort the remaining files.
    ///
    pub fn create(&self, file_paths: &[String]) -> anyhow::Result<()> {
        let harness_directory = crate::harness_directory(self.project_directory.as_path());

        if harness_directory.exists() {
            let mut entries = fs::read_dir(harness_directory.as_path()).map_err(|error| {
                anyhow::anyhow!("Failed to read the directory {harness_directory:?}: {error}")
            })?;
            if entries.next().is_some() {
                eprintln!(
                    "{}",
                    format!(
                        "The harness directory {harness_directory:?} already holds files, skipping"
                    )
                    .yellow()
                );
                return Ok(());
            }
        } else {
            fs::create_dir_all(harness_directory.as_path()).map_err(|error| {
                anyhow::anyhow!("Failed to create the directory {harness_directory:?}: {error}")
            })?;
        }

        let mut review = Vec::new();
        for template in self::template_files().into_iter() {
            let directory = match (template.in_project_root, template.subdirectory) {
                (true, _) => self.project_directory.clone(),
                (false, Some(subdirectory)) => harness_directory.join(subdirectory),
                (false, None) => harness_directory.clone(),
            };
            if let Err(error) = fs::create_dir_all(directory.as_path()) {
                eprintln!(
                    "{}",
                    format!("Failed to create the directory {directory:?}: {error}").bright_red()
                );
                continue;
            }

            let path = directory.join(template.name);
            if path.exists() {
                eprintln!(
                    "{}",
                    format!("File `{}` already exists", template.name).yellow()
                );
                continue;
            }
            if let Err(error) = fs::write(path.as_path(), template.content) {
                eprintln!(
                    "{}",
                    format!("Failed to write the file {path:?}: {error}").bright_red()
                );
                continue;
            }

            if template.open_on_create {
                review.push(path);
            }
        }

        if !review.is_empty() {
            println!("{}", "    Created files to review:".bright_green().bold());
            for path in review.iter() {
                println!("        {}", path.to_string_lossy());
            }
        }

        self.insert_imports(harness_directory.as_path(), file_paths)
    }

    ///
    /// Splices one import statement per known contract file path after the
    /// last import line of the Base file.
    ///
    fn insert_imports(&self, harness_directory: &Path, file_paths: &[String]) -> anyhow::Result<()> {
        if file_paths.is_empty() {
            return Ok(());
        }

        let base_path = harness_directory.join(crate::BASE_FILE_NAME);
        let mut base = fs::read_to_string(base_path.as_path()).map_err(|error| {
            anyhow::anyhow!("Failed to read the file {base_path:?}: {error}")
        })?;

        let mut imports = String::new();
        for file_path in file_paths.iter() {
            imports.push_str(format!("\nimport \"{file_path}\";").as_str());
        }

        let offset = crate::splice::after_last_import(base.as_str()).ok_or_else(|| {
            anyhow::anyhow!("Import block not found in the file {base_path:?}")
        })?;
        base.insert_str(offset, imports.as_str());

        fs::write(base_path.as_path(), base.as_str())
            .map_err(|error| anyhow::anyhow!("Failed to write the file {base_path:?}: {error}"))
    }
}
