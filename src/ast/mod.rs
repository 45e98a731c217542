//! Syntax tree construction and rendering

mod label;
mod tex;
mod tree;

pub use label::{Label, RenderError, ToTex, Token};
pub use tex::{
    EPSILON_TEX, FOREST_PICTURE_FOOTER, FOREST_PICTURE_HEADER, LUALATEX_DOC_FOOTER,
    LUALATEX_DOC_HEADER, PDFLATEX_DOC_FOOTER, PDFLATEX_DOC_HEADER, TIKZ_PICTURE_FOOTER,
    TIKZ_PICTURE_HEADER,
};
pub use tree::{ParseTree, PreOrderIter, SyntaxTree, TreeError};
