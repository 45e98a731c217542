//! Node labels and their TeX rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Label '{0}' has no TeX rendering")]
    Unrenderable(String),
}

/// Renders an identifier as TeX source
pub trait ToTex {
    fn to_tex(&self) -> Result<String, RenderError>;
}

impl ToTex for String {
    fn to_tex(&self) -> Result<String, RenderError> {
        Ok(self.clone())
    }
}

/// A terminal occurrence: the terminal identifier plus the matched lexeme, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<T> {
    terminal: T,
    lexeme: Option<String>,
}

impl<T> Token<T> {
    /// Token carrying the lexeme the lexer matched
    pub fn new(terminal: T, lexeme: impl Into<String>) -> Self {
        Self {
            terminal,
            lexeme: Some(lexeme.into()),
        }
    }

    /// Token without a lexeme; the terminal stands for itself
    pub fn bare(terminal: T) -> Self {
        Self {
            terminal,
            lexeme: None,
        }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn lexeme(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }
}

impl<T: ToTex> ToTex for Token<T> {
    fn to_tex(&self) -> Result<String, RenderError> {
        match &self.lexeme {
            Some(lexeme) => Ok(lexeme.clone()),
            None => self.terminal.to_tex(),
        }
    }
}

/// What a syntax tree node denotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label<V, T> {
    /// The empty symbol
    Epsilon,
    /// A terminal occurrence
    Token(Token<T>),
    /// A grammar variable
    Variable(V),
}

impl<V, T> Label<V, T> {
    /// Label for a grammar variable
    pub fn variable(variable: V) -> Self {
        Label::Variable(variable)
    }

    /// Label for a token
    pub fn token(token: Token<T>) -> Self {
        Label::Token(token)
    }

    /// Label for a bare terminal
    pub fn terminal(terminal: T) -> Self {
        Label::Token(Token::bare(terminal))
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl<V, T> From<Token<T>> for Label<V, T> {
    fn from(token: Token<T>) -> Self {
        Label::Token(token)
    }
}

impl<V: ToTex, T: ToTex> Label<V, T> {
    /// TeX content of this label. Epsilon has none; the bracket writer
    /// substitutes its glyph itself.
    pub fn to_tex(&self) -> Result<String, RenderError> {
        match self {
            Label::Epsilon => Ok(String::new()),
            Label::Token(token) => token.to_tex(),
            Label::Variable(variable) => variable.to_tex(),
        }
    }
}
