//! Builds abstract syntax trees from parse trees and renders them as
//! LaTeX documents: `forest` bracket trees for PDFLaTeX, or TikZ
//! graphdrawing pictures for LuaLaTeX.
//!
//! The tree is generic over the grammar's variable and terminal types;
//! both render through the [`ast::ToTex`] capability.
//!
//! ```
//! use arbortex::ast::{Label, SyntaxTree};
//!
//! let mut tree = SyntaxTree::new(Label::<String, String>::variable("Expr".to_string()));
//! tree.add_child(SyntaxTree::new(Label::terminal("a".to_string())));
//!
//! assert_eq!(tree.to_latex_tree().unwrap(), "[{Expr} [{a} ]]");
//! ```

pub mod ast;
pub mod config;
pub mod input;
pub mod output;
