//! Common test utilities

use arbortex::ast::{Label, SyntaxTree, Token};
use arbortex::input::TreeDocument;

pub type Tree = SyntaxTree<String, String>;

/// Leaf node for a bare terminal
pub fn leaf(terminal: &str) -> Tree {
    SyntaxTree::new(Label::terminal(terminal.to_string()))
}

/// Leaf node for a terminal with its matched lexeme
pub fn token(terminal: &str, lexeme: &str) -> Tree {
    SyntaxTree::new(Label::token(Token::new(terminal.to_string(), lexeme)))
}

/// Leaf node for the empty symbol
pub fn epsilon() -> Tree {
    SyntaxTree::new(Label::Epsilon)
}

/// Internal node labelled with a grammar variable
pub fn var(name: &str, children: Vec<Tree>) -> Tree {
    SyntaxTree::with_children(Label::variable(name.to_string()), children)
}

/// A small while-loop parse tree as an external parser would emit it
pub const WHILE_LOOP_JSON: &str = r#"{
    "name": "while_loop",
    "root": {
        "variable": "Statement",
        "children": [
            { "terminal": "WHILE" },
            {
                "variable": "Condition",
                "children": [
                    { "terminal": "ID", "lexeme": "x" },
                    { "terminal": "GT" },
                    { "terminal": "NUM", "lexeme": "0" }
                ]
            },
            { "variable": "Body", "children": [ { "epsilon": true } ] }
        ]
    }
}"#;

pub fn while_loop_document() -> TreeDocument {
    TreeDocument::from_json(WHILE_LOOP_JSON).expect("Failed to parse fixture")
}

/// The syntax tree the while-loop fixture describes
pub fn while_loop_tree() -> Tree {
    var(
        "Statement",
        vec![
            leaf("WHILE"),
            var(
                "Condition",
                vec![token("ID", "x"), leaf("GT"), token("NUM", "0")],
            ),
            var("Body", vec![epsilon()]),
        ],
    )
}
