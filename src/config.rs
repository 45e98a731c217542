//! Project discovery and configuration

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read arbortex.toml: {0}")]
    ConfigReadError(#[from] std::io::Error),

    #[error("Failed to parse arbortex.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Tree '{0}' not found in project")]
    TreeNotFound(String),
}

/// Which document dialect(s) to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Pdflatex,
    Lualatex,
    Both,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    project: Option<ProjectSection>,
    render: Option<RenderSection>,
}

#[derive(Debug, Deserialize, Default)]
struct ProjectSection {
    src: Option<String>,
    out: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RenderSection {
    engine: Option<Engine>,
}

#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub src_dir: PathBuf,
    pub out_dir: PathBuf,
    pub engine: Engine,
}

impl Project {
    /// Discover a project by searching for arbortex.toml in the current
    /// directory or any parent. Without one, the current directory is the
    /// project root with default settings.
    pub fn discover() -> Result<Self, ConfigError> {
        let current_dir = std::env::current_dir()?;

        let root = match Self::find_project_root(&current_dir) {
            Some(root) => root,
            None => return Ok(Self::with_defaults(current_dir, ConfigFile::default())),
        };

        let config_path = root.join("arbortex.toml");
        let config_content = fs::read_to_string(&config_path)?;
        let config: ConfigFile = toml::from_str(&config_content)?;

        Ok(Self::with_defaults(root, config))
    }

    /// Resolve settings against their defaults
    fn with_defaults(root: PathBuf, config: ConfigFile) -> Self {
        let project = config.project.unwrap_or_default();
        let render = config.render.unwrap_or_default();

        let src_dir = root.join(project.src.unwrap_or_else(|| "trees".to_string()));
        let out_dir = root.join(project.out.unwrap_or_else(|| "tex".to_string()));
        let engine = render.engine.unwrap_or(Engine::Pdflatex);

        Self {
            root,
            src_dir,
            out_dir,
            engine,
        }
    }

    fn find_project_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join("arbortex.toml").exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Find a tree file by document stem
    pub fn find_tree(&self, name: &str) -> Result<PathBuf, ConfigError> {
        let expected_filename = format!("{}.json", name);

        for entry in WalkDir::new(&self.src_dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() {
                if let Some(file_name) = entry.file_name().to_str() {
                    if file_name == expected_filename {
                        return Ok(entry.path().to_path_buf());
                    }
                }
            }
        }

        Err(ConfigError::TreeNotFound(name.to_string()))
    }

    /// Find all tree files in the src directory
    pub fn find_all_trees(&self) -> Vec<PathBuf> {
        let mut trees = Vec::new();

        for entry in WalkDir::new(&self.src_dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() {
                if let Some(ext) = entry.path().extension() {
                    if ext == "json" {
                        trees.push(entry.path().to_path_buf());
                    }
                }
            }
        }

        trees
    }
}
