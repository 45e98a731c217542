//! Parse tree interchange format

use serde::Deserialize;
use thiserror::Error;

use crate::ast::{Label, ParseTree, SyntaxTree, Token, TreeError};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to parse tree document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parse tree file: an optional document name plus the root node
#[derive(Debug, Deserialize)]
pub struct TreeDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub root: ParseNode,
}

impl TreeDocument {
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the syntax tree this document describes
    pub fn to_syntax_tree(&self) -> Result<SyntaxTree<String, String>, TreeError> {
        SyntaxTree::from_parse_tree(&self.root)
    }
}

/// One node of a serialized parse tree. A node is internal when it names a
/// grammar variable, otherwise a terminal or an epsilon leaf.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParseNode {
    Internal {
        variable: String,
        #[serde(default)]
        children: Vec<ParseNode>,
    },
    Token {
        terminal: String,
        #[serde(default)]
        lexeme: Option<String>,
    },
    Epsilon {
        #[serde(deserialize_with = "true_only")]
        epsilon: bool,
    },
}

/// Leaf payload handed over during population
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafSymbol {
    Token {
        terminal: String,
        lexeme: Option<String>,
    },
    Epsilon,
}

impl From<LeafSymbol> for Label<String, String> {
    fn from(symbol: LeafSymbol) -> Self {
        match symbol {
            LeafSymbol::Token {
                terminal,
                lexeme: Some(lexeme),
            } => Label::token(Token::new(terminal, lexeme)),
            LeafSymbol::Token {
                terminal,
                lexeme: None,
            } => Label::terminal(terminal),
            LeafSymbol::Epsilon => Label::Epsilon,
        }
    }
}

impl ParseTree for ParseNode {
    type Token = LeafSymbol;
    type Variable = String;

    fn is_leaf(&self) -> bool {
        !matches!(self, ParseNode::Internal { .. })
    }

    fn token(&self) -> Option<LeafSymbol> {
        match self {
            ParseNode::Token { terminal, lexeme } => Some(LeafSymbol::Token {
                terminal: terminal.clone(),
                lexeme: lexeme.clone(),
            }),
            ParseNode::Epsilon { .. } => Some(LeafSymbol::Epsilon),
            ParseNode::Internal { .. } => None,
        }
    }

    fn variable(&self) -> Option<String> {
        match self {
            ParseNode::Internal { variable, .. } => Some(variable.clone()),
            _ => None,
        }
    }

    fn children(&self) -> Option<&[ParseNode]> {
        match self {
            ParseNode::Internal { children, .. } => Some(children),
            _ => None,
        }
    }
}

fn true_only<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = bool::deserialize(deserializer)?;
    if value {
        Ok(true)
    } else {
        Err(serde::de::Error::custom("expected `epsilon` to be true"))
    }
}
