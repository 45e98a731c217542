//! Integration tests for arbortex document rendering

mod common;

use common::{epsilon, leaf, token, var, while_loop_document, while_loop_tree};
use pretty_assertions::assert_eq;

use arbortex::ast::{
    FOREST_PICTURE_FOOTER, FOREST_PICTURE_HEADER, LUALATEX_DOC_FOOTER, LUALATEX_DOC_HEADER,
    PDFLATEX_DOC_FOOTER, PDFLATEX_DOC_HEADER, TIKZ_PICTURE_FOOTER, TIKZ_PICTURE_HEADER,
};
use arbortex::output::{document_path, write_document};

#[test]
fn test_while_loop_shape_is_isomorphic() {
    let tree = while_loop_document().to_syntax_tree().unwrap();

    assert_eq!(tree, while_loop_tree());
    assert_eq!(tree.node_count(), 8);
}

#[test]
fn test_while_loop_bracket_tree() {
    let tree = while_loop_document().to_syntax_tree().unwrap();

    let expected =
        r"[{Statement} [{WHILE} ][{Condition} [{x} ][{GT} ][{0} ]][{Body} [{$\varepsilon$} ]]]";
    assert_eq!(tree.to_latex_tree().unwrap(), expected);
}

#[test]
fn test_while_loop_tikz() {
    let tree = while_loop_document().to_syntax_tree().unwrap();

    let expected = r#"node {Statement}
child { node {WHILE}
 }
child { node {Condition}
child { node {x}
 }
child { node {GT}
 }
child { node {0}
 }
 }
child { node {Body}
child { node {}
 }
 }
"#;
    assert_eq!(tree.to_tikz().unwrap(), expected);
}

#[test]
fn test_brackets_balance_with_node_count() {
    let trees = [
        while_loop_tree(),
        var("Wide", vec![leaf("a"), leaf("b"), leaf("c"), epsilon()]),
        token("NUM", "7"),
    ];

    for tree in &trees {
        let rendered = tree.to_latex_tree().unwrap();
        assert_eq!(rendered.matches('[').count(), tree.node_count());
        assert_eq!(rendered.matches(']').count(), tree.node_count());
    }
}

#[test]
fn test_tikz_child_count_is_node_count_minus_one() {
    let tree = while_loop_tree();
    let rendered = tree.to_tikz().unwrap();

    assert_eq!(rendered.matches("child {").count(), tree.node_count() - 1);
    assert_eq!(rendered.matches("node {").count(), tree.node_count());
}

#[test]
fn test_forest_picture_wraps_bracket_tree() {
    let tree = while_loop_tree();

    let expected = format!(
        "{}{}{}",
        FOREST_PICTURE_HEADER,
        tree.to_latex_tree().unwrap(),
        FOREST_PICTURE_FOOTER
    );
    assert_eq!(tree.to_forest_picture().unwrap(), expected);
}

#[test]
fn test_tikz_picture_wraps_tikz() {
    let tree = while_loop_tree();

    let expected = format!(
        "{}{}{}",
        TIKZ_PICTURE_HEADER,
        tree.to_tikz().unwrap(),
        TIKZ_PICTURE_FOOTER
    );
    assert_eq!(tree.to_tikz_picture().unwrap(), expected);
}

#[test]
fn test_pdflatex_document() {
    let tree = var("S", vec![leaf("a")]);

    let expected = r#"\documentclass[border=5pt]{standalone}

\usepackage{tikz}
\usepackage{forest}

\begin{document}

\begin{forest}for tree={rectangle,draw, l sep=20pt}[{S} [{a} ]];
\end{forest}

\end{document}
%% Local Variables:
%% TeX-engine: pdflatex
%% End:"#;
    assert_eq!(tree.to_latex().unwrap(), expected);
}

#[test]
fn test_lualatex_document() {
    let tree = var("S", vec![epsilon()]);

    let expected = r#"\RequirePackage{luatex85}
\documentclass{standalone}

\usepackage{tikz}

\usetikzlibrary{graphdrawing, graphdrawing.trees}

\begin{document}

\begin{tikzpicture}[tree layout]
\node {S}
child { node {}
 }
;
\end{tikzpicture}

\end{document}
%% Local Variables:
%% TeX-engine: luatex
%% End:"#;
    assert_eq!(tree.to_latex_with_lua().unwrap(), expected);
}

#[test]
fn test_documents_differ_only_in_preamble_and_picture() {
    let tree = while_loop_tree();

    let latex = tree.to_latex().unwrap();
    let lua = tree.to_latex_with_lua().unwrap();

    assert_eq!(
        latex,
        format!(
            "{}{}{}",
            PDFLATEX_DOC_HEADER,
            tree.to_forest_picture().unwrap(),
            PDFLATEX_DOC_FOOTER
        )
    );
    assert_eq!(
        lua,
        format!(
            "{}{}{}",
            LUALATEX_DOC_HEADER,
            tree.to_tikz_picture().unwrap(),
            LUALATEX_DOC_FOOTER
        )
    );
    assert_ne!(latex, lua);
}

#[test]
fn test_deep_tree_renders_without_overflow() {
    let mut tree = leaf("x");
    for _ in 0..100_000 {
        tree = var("V", vec![tree]);
    }

    let bracket = tree.to_latex_tree().unwrap();
    assert_eq!(bracket.matches('[').count(), 100_001);
    assert_eq!(bracket.matches(']').count(), 100_001);

    let tikz = tree.to_tikz().unwrap();
    assert_eq!(tikz.matches("child {").count(), 100_000);
}

#[test]
fn test_write_document_creates_parent_directories() {
    let out_dir = std::env::temp_dir().join(format!("arbortex_test_{}", std::process::id()));
    let path = document_path(&out_dir.join("nested"), "while_loop", false);

    let tree = while_loop_tree();
    let content = tree.to_latex().unwrap();
    write_document(&path, &content).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, content);

    let _ = std::fs::remove_dir_all(&out_dir);
}
