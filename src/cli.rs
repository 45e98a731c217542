use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use arbortex::config::{Engine, Project};
use arbortex::input::TreeDocument;
use arbortex::output::{document_path, write_document};

/// Arbortex - render parse trees as LaTeX documents
#[derive(Parser)]
#[command(name = "arbortex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render parse tree files as LaTeX documents
    Render {
        /// Tree (optional): a file path or a document stem.
        /// If omitted, renders every tree file in the project src directory
        #[arg(value_name = "TREE", default_value = "")]
        tree: String,

        /// Output directory (default: the configured out directory)
        #[arg(short, long)]
        output: Option<String>,

        /// Engine: pdflatex, lualatex or both (default: the configured engine)
        #[arg(short, long)]
        engine: Option<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            Commands::Render {
                tree,
                output,
                engine,
            } => render_trees(&tree, output, engine),
        }
    }
}

fn render_trees(
    target: &str,
    output: Option<String>,
    engine: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = Project::discover()?;
    println!("Rendering in project at: {:?}", project.root);

    let out_dir = match output {
        Some(dir) => PathBuf::from(dir),
        None => project.out_dir.clone(),
    };

    let engine = match engine {
        Some(name) => parse_engine(&name).ok_or_else(|| {
            format!("Unknown engine '{}', expected pdflatex, lualatex or both", name)
        })?,
        None => project.engine,
    };

    if target.is_empty() {
        // Render every tree file under the src directory
        let tree_files = project.find_all_trees();
        if tree_files.is_empty() {
            println!("No tree files found in {:?}", project.src_dir);
            return Ok(());
        }

        println!("Found {} tree files", tree_files.len());
        let mut total_documents = 0;

        for file_path in tree_files {
            match render_file(&file_path, &out_dir, engine) {
                Ok(count) => total_documents += count,
                Err(e) => {
                    eprintln!("Warning: Failed to render {:?}: {}", file_path, e);
                    continue;
                }
            }
        }

        println!("Rendered {} documents total", total_documents);
        return Ok(());
    }

    // A path renders directly; a bare name is resolved in the src directory
    let file_path = if Path::new(target).is_file() {
        PathBuf::from(target)
    } else {
        project.find_tree(target)?
    };

    let count = render_file(&file_path, &out_dir, engine)?;
    println!("Rendered {} documents", count);

    Ok(())
}

/// Render one tree file, returning the number of documents written
fn render_file(
    file_path: &Path,
    out_dir: &Path,
    engine: Engine,
) -> Result<usize, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file_path)?;
    let document = TreeDocument::from_json(&content)?;
    let tree = document.to_syntax_tree()?;

    let stem = document_stem(&document, file_path);
    let mut written = 0;

    if matches!(engine, Engine::Pdflatex | Engine::Both) {
        let output_path = document_path(out_dir, &stem, false);
        write_document(&output_path, &tree.to_latex()?)?;
        println!("  -> {:?}", output_path);
        written += 1;
    }

    if matches!(engine, Engine::Lualatex | Engine::Both) {
        let output_path = document_path(out_dir, &stem, true);
        write_document(&output_path, &tree.to_latex_with_lua()?)?;
        println!("  -> {:?}", output_path);
        written += 1;
    }

    Ok(written)
}

/// Document stem: the name from the document if set, else the file stem
fn document_stem(document: &TreeDocument, file_path: &Path) -> String {
    if let Some(name) = &document.name {
        if !name.is_empty() {
            return name.clone();
        }
    }

    file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("tree")
        .to_string()
}

fn parse_engine(name: &str) -> Option<Engine> {
    match name {
        "pdflatex" => Some(Engine::Pdflatex),
        "lualatex" => Some(Engine::Lualatex),
        "both" => Some(Engine::Both),
        _ => None,
    }
}
