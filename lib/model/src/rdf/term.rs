use crate::GraphLiteral;
use oxrdf::{BlankNode, Literal, NamedNode, Variable};
use std::fmt::{Display, Formatter};

/// A node that can appear in any position of a [Triple](crate::Triple).
///
/// Equality is structural. Two terms of different variants are never equal, even if their
/// textual payload is identical (e.g., the IRI `<a>` and the variable `?a`).
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
    GraphLiteral(GraphLiteral),
    Variable(Variable),
}

impl Term {
    /// Returns whether this term is free of blank nodes and variables.
    ///
    /// Graph literals are ground iff all of their triples are ground.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::NamedNode(_) | Term::Literal(_) => true,
            Term::BlankNode(_) | Term::Variable(_) => false,
            Term::GraphLiteral(graph) => graph.is_ground(),
        }
    }

    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn is_graph_literal(&self) -> bool {
        matches!(self, Term::GraphLiteral(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::NamedNode(inner) => inner.fmt(f),
            Term::BlankNode(inner) => inner.fmt(f),
            Term::Literal(inner) => inner.fmt(f),
            Term::GraphLiteral(inner) => inner.fmt(f),
            Term::Variable(inner) => inner.fmt(f),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(value: NamedNode) -> Self {
        Term::NamedNode(value)
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Term::BlankNode(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

impl From<GraphLiteral> for Term {
    fn from(value: GraphLiteral) -> Self {
        Term::GraphLiteral(value)
    }
}

impl From<Variable> for Term {
    fn from(value: Variable) -> Self {
        Term::Variable(value)
    }
}
