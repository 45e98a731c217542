//! Syntax tree construction from parse trees

use thiserror::Error;

use super::label::Label;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Parse tree leaf carries no token")]
    LeafWithoutToken,

    #[error("Parse tree internal node carries no grammar variable")]
    InternalWithoutVariable,

    #[error("Parse tree internal node carries no child list")]
    InternalWithoutChildren,
}

/// Access contract for an externally produced parse tree
pub trait ParseTree: Sized {
    /// Leaf payload, convertible into a label at the population site
    type Token;
    /// Internal node payload, convertible into a grammar variable
    type Variable;

    fn is_leaf(&self) -> bool;

    /// The token of a leaf node. `None` on internal or malformed nodes.
    fn token(&self) -> Option<Self::Token>;

    /// The grammar variable of an internal node. `None` on leaves.
    fn variable(&self) -> Option<Self::Variable>;

    /// The ordered children of an internal node. `None` on leaves.
    fn children(&self) -> Option<&[Self]>;
}

/// A node of the abstract syntax tree, owning its ordered children
#[derive(Debug, PartialEq)]
pub struct SyntaxTree<V, T> {
    label: Label<V, T>,
    children: Vec<SyntaxTree<V, T>>,
}

impl<V, T> SyntaxTree<V, T> {
    /// Singleton node with no children
    pub fn new(label: impl Into<Label<V, T>>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Node with an already built, ordered child list
    pub fn with_children(label: impl Into<Label<V, T>>, children: Vec<SyntaxTree<V, T>>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn label(&self) -> &Label<V, T> {
        &self.label
    }

    pub fn children(&self) -> &[SyntaxTree<V, T>] {
        &self.children
    }

    /// Append a child after the existing ones. Children are never removed
    /// or reordered.
    pub fn add_child(&mut self, child: SyntaxTree<V, T>) {
        self.children.push(child);
    }

    /// Number of nodes in this subtree, this node included
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Depth-first, left-to-right iteration over the nodes of this subtree
    pub fn iter(&self) -> PreOrderIter<'_, V, T> {
        PreOrderIter { stack: vec![self] }
    }

    /// Convert a whole parse tree into a syntax tree. The result has the
    /// same node count, branching and child order as the input; recursion
    /// depth follows the parse tree height.
    pub fn from_parse_tree<P>(parse_tree: &P) -> Result<Self, TreeError>
    where
        P: ParseTree,
        P::Token: Into<Label<V, T>>,
        P::Variable: Into<V>,
    {
        if parse_tree.is_leaf() {
            let token = parse_tree.token().ok_or(TreeError::LeafWithoutToken)?;
            return Ok(SyntaxTree::new(token));
        }

        let variable = parse_tree
            .variable()
            .ok_or(TreeError::InternalWithoutVariable)?;
        let children = parse_tree
            .children()
            .ok_or(TreeError::InternalWithoutChildren)?;

        let mut node = SyntaxTree::new(Label::Variable(variable.into()));
        node.populate_forest(children)?;
        Ok(node)
    }

    /// Convert one parse node and append the result as a new child of this
    /// node. Malformed input fails before anything is attached.
    pub fn populate<P>(&mut self, parse_tree: &P) -> Result<(), TreeError>
    where
        P: ParseTree,
        P::Token: Into<Label<V, T>>,
        P::Variable: Into<V>,
    {
        let child = Self::from_parse_tree(parse_tree)?;
        self.add_child(child);
        Ok(())
    }

    /// Populate from a list of parse nodes, one new child per element, in order
    pub fn populate_forest<P>(&mut self, parse_trees: &[P]) -> Result<(), TreeError>
    where
        P: ParseTree,
        P::Token: Into<Label<V, T>>,
        P::Variable: Into<V>,
    {
        for parse_tree in parse_trees {
            self.populate(parse_tree)?;
        }
        Ok(())
    }
}

impl<V, T> Drop for SyntaxTree<V, T> {
    fn drop(&mut self) {
        // Drain the subtree into a flat worklist; every node then drops
        // with an empty child list, keeping deep trees off the call stack.
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Depth-first, left-to-right iterator over tree nodes
pub struct PreOrderIter<'a, V, T> {
    stack: Vec<&'a SyntaxTree<V, T>>,
}

impl<'a, V, T> Iterator for PreOrderIter<'a, V, T> {
    type Item = &'a SyntaxTree<V, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
