use crate::GraphLiteral;
use oxrdf::{BlankNode, Literal, NamedNode, Variable};
use std::sync::atomic::{AtomicU64, Ordering};

/// Creates the nodes that make up triples and quads.
///
/// Producers (e.g., parsers) use a [NodeFactory] instead of constructing nodes directly, such
/// that a consumer can control how blank node identifiers are minted. Implementations are not
/// required to validate IRIs, language tags, or lexical forms.
pub trait NodeFactory {
    /// Creates a blank node with a fresh identifier.
    fn create_blank_node(&self) -> BlankNode;

    /// Creates a graph literal that wraps the empty sub-graph.
    fn create_graph_literal_node(&self) -> GraphLiteral {
        self.create_graph_literal_node_from(GraphLiteral::new())
    }

    /// Creates a graph literal that wraps `graph`.
    fn create_graph_literal_node_from(&self, graph: GraphLiteral) -> GraphLiteral;

    /// Creates a plain literal.
    fn create_literal_node(&self, value: &str) -> Literal;

    fn create_literal_node_with_datatype(&self, value: &str, datatype: NamedNode) -> Literal;

    fn create_literal_node_with_language(&self, value: &str, language: &str) -> Literal;

    fn create_uri_node(&self, iri: &str) -> NamedNode;

    fn create_variable_node(&self, name: &str) -> Variable;
}

/// A [NodeFactory] that mints blank node identifiers from a counter.
///
/// Identifiers are only unique within a single factory. Two factories with the same prefix
/// produce colliding identifiers.
#[derive(Debug)]
pub struct SimpleNodeFactory {
    prefix: String,
    next_id: AtomicU64,
}

impl SimpleNodeFactory {
    pub fn new() -> Self {
        Self::with_prefix("b")
    }

    /// Creates a factory whose blank node identifiers start with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for SimpleNodeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeFactory for SimpleNodeFactory {
    fn create_blank_node(&self) -> BlankNode {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(prefix = %self.prefix, id, "Minted blank node");
        BlankNode::new_unchecked(format!("{}{id}", self.prefix))
    }

    fn create_graph_literal_node_from(&self, graph: GraphLiteral) -> GraphLiteral {
        graph
    }

    fn create_literal_node(&self, value: &str) -> Literal {
        Literal::new_simple_literal(value)
    }

    fn create_literal_node_with_datatype(&self, value: &str, datatype: NamedNode) -> Literal {
        Literal::new_typed_literal(value, datatype)
    }

    fn create_literal_node_with_language(&self, value: &str, language: &str) -> Literal {
        Literal::new_language_tagged_literal_unchecked(value, language.to_ascii_lowercase())
    }

    fn create_uri_node(&self, iri: &str) -> NamedNode {
        NamedNode::new_unchecked(iri)
    }

    fn create_variable_node(&self, name: &str) -> Variable {
        Variable::new_unchecked(name)
    }
}
