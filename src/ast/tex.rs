//! TeX serialization of syntax trees

use super::label::{RenderError, ToTex};
use super::tree::SyntaxTree;

/// Glyph substituted for epsilon nodes in bracket renderings
pub const EPSILON_TEX: &str = "$\\varepsilon$";

/// Ends with the backslash of the root `\node` on the next line
pub const TIKZ_PICTURE_HEADER: &str = "\\begin{tikzpicture}[tree layout]\n\\";
pub const TIKZ_PICTURE_FOOTER: &str = ";\n\\end{tikzpicture}";

pub const FOREST_PICTURE_HEADER: &str = "\\begin{forest}for tree={rectangle,draw, l sep=20pt}";
pub const FOREST_PICTURE_FOOTER: &str = ";\n\\end{forest}";

pub const PDFLATEX_DOC_HEADER: &str = "\\documentclass[border=5pt]{standalone}\n\n\\usepackage{tikz}\n\\usepackage{forest}\n\n\\begin{document}\n\n";
pub const PDFLATEX_DOC_FOOTER: &str =
    "\n\n\\end{document}\n%% Local Variables:\n%% TeX-engine: pdflatex\n%% End:";

pub const LUALATEX_DOC_HEADER: &str = "\\RequirePackage{luatex85}\n\\documentclass{standalone}\n\n\\usepackage{tikz}\n\n\\usetikzlibrary{graphdrawing, graphdrawing.trees}\n\n\\begin{document}\n\n";
pub const LUALATEX_DOC_FOOTER: &str =
    "\n\n\\end{document}\n%% Local Variables:\n%% TeX-engine: luatex\n%% End:";

/// Pending work of an iterative rendering pass: a node still to emit, or
/// literal text interleaved around child renderings.
enum Frame<'a, V, T> {
    Node(&'a SyntaxTree<V, T>),
    Lit(&'static str),
}

impl<V: ToTex, T: ToTex> SyntaxTree<V, T> {
    /// Bracket rendering, one `[{content} child...]` group per node.
    /// Epsilon nodes show the epsilon glyph.
    pub fn to_latex_tree(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        let mut stack = vec![Frame::Node(self)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Lit(text) => out.push_str(text),
                Frame::Node(node) => {
                    out.push_str("[{");
                    if node.label().is_epsilon() {
                        out.push_str(EPSILON_TEX);
                    } else {
                        out.push_str(&node.label().to_tex()?);
                    }
                    out.push_str("} ");

                    stack.push(Frame::Lit("]"));
                    for child in node.children().iter().rev() {
                        stack.push(Frame::Node(child));
                    }
                }
            }
        }

        Ok(out)
    }

    /// Nested `node`/`child` rendering. Epsilon nodes show as empty nodes
    /// since this writer has no glyph substitution.
    pub fn to_tikz(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        let mut stack = vec![Frame::Node(self)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Lit(text) => out.push_str(text),
                Frame::Node(node) => {
                    out.push_str("node {");
                    out.push_str(&node.label().to_tex()?);
                    out.push_str("}\n");

                    for child in node.children().iter().rev() {
                        stack.push(Frame::Lit(" }\n"));
                        stack.push(Frame::Node(child));
                        stack.push(Frame::Lit("child { "));
                    }
                }
            }
        }

        Ok(out)
    }

    /// [`to_tikz`](Self::to_tikz) wrapped as a complete tikzpicture environment
    pub fn to_tikz_picture(&self) -> Result<String, RenderError> {
        Ok(format!(
            "{}{}{}",
            TIKZ_PICTURE_HEADER,
            self.to_tikz()?,
            TIKZ_PICTURE_FOOTER
        ))
    }

    /// [`to_latex_tree`](Self::to_latex_tree) wrapped as a complete forest environment
    pub fn to_forest_picture(&self) -> Result<String, RenderError> {
        Ok(format!(
            "{}{}{}",
            FOREST_PICTURE_HEADER,
            self.to_latex_tree()?,
            FOREST_PICTURE_FOOTER
        ))
    }

    /// Standalone document around the forest picture, for PDFLaTeX
    pub fn to_latex(&self) -> Result<String, RenderError> {
        Ok(format!(
            "{}{}{}",
            PDFLATEX_DOC_HEADER,
            self.to_forest_picture()?,
            PDFLATEX_DOC_FOOTER
        ))
    }

    /// Standalone document around the tikzpicture, for LuaLaTeX
    pub fn to_latex_with_lua(&self) -> Result<String, RenderError> {
        Ok(format!(
            "{}{}{}",
            LUALATEX_DOC_HEADER,
            self.to_tikz_picture()?,
            LUALATEX_DOC_FOOTER
        ))
    }
}
