use crate::{QuadError, Term, Triple};
use oxrdf::{GraphName, NamedNode};
use rustc_hash::FxHasher;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A [Triple] that lives in a particular graph.
///
/// A graph of `None` denotes the default graph. Quads are immutable and share their triple, so
/// cloning a quad never clones the triple.
///
/// # Hashing
///
/// The hash is computed once at construction from the canonical string (see the [Display]
/// implementation) and is never recomputed. As equal quads have equal canonical strings, the
/// cached hash is consistent with [PartialEq].
#[derive(Clone, Debug)]
pub struct Quad {
    triple: Arc<Triple>,
    graph: Option<NamedNode>,
    hash: u64,
}

impl Quad {
    pub fn new(triple: impl Into<Arc<Triple>>, graph: Option<NamedNode>) -> Self {
        let triple = triple.into();
        let hash = canonical_hash(&triple, graph.as_ref());
        Self {
            triple,
            graph,
            hash,
        }
    }

    /// Creates a new quad from a triple that may be missing.
    ///
    /// Returns [QuadError::MissingTriple] if no triple is given.
    pub fn try_new(
        triple: Option<Arc<Triple>>,
        graph: Option<NamedNode>,
    ) -> Result<Self, QuadError> {
        let triple = triple.ok_or(QuadError::MissingTriple)?;
        Ok(Self::new(triple, graph))
    }

    pub fn from_parts(
        subject: Term,
        predicate: Term,
        object: Term,
        graph: Option<NamedNode>,
    ) -> Self {
        Self::new(Triple::new(subject, predicate, object), graph)
    }

    pub fn subject(&self) -> &Term {
        self.triple.subject()
    }

    pub fn predicate(&self) -> &Term {
        self.triple.predicate()
    }

    pub fn object(&self) -> &Term {
        self.triple.object()
    }

    /// Returns the graph of this quad, or `None` for the default graph.
    pub fn graph(&self) -> Option<&NamedNode> {
        self.graph.as_ref()
    }

    pub fn graph_name(&self) -> GraphName {
        self.graph
            .clone()
            .map_or(GraphName::DefaultGraph, GraphName::NamedNode)
    }

    pub fn is_default_graph(&self) -> bool {
        self.graph.is_none()
    }

    pub fn is_ground_quad(&self) -> bool {
        self.triple.is_ground()
    }

    /// Returns the shared triple of this quad.
    pub fn as_triple(&self) -> &Arc<Triple> {
        &self.triple
    }

    /// Returns this quad moved into `graph`.
    ///
    /// If `graph` is equal to the current graph, `self` is returned without allocating a new
    /// quad.
    pub fn copy_to(&self, graph: Option<NamedNode>) -> Cow<'_, Quad> {
        if self.graph == graph {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(Self::new(Arc::clone(&self.triple), graph))
        }
    }
}

impl PartialEq for Quad {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.graph == other.graph && self.triple == other.triple
    }
}

impl Eq for Quad {}

impl Hash for Quad {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Display for Quad {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Canonical {
            triple: &self.triple,
            graph: self.graph.as_ref(),
        }
        .fmt(f)
    }
}

/// The canonical string of a quad. Used for display and hashing.
struct Canonical<'a> {
    triple: &'a Triple,
    graph: Option<&'a NamedNode>,
}

impl Display for Canonical<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.graph {
            None => write!(f, "{} in Default Graph", self.triple),
            Some(graph) => write!(f, "{} in Graph {}", self.triple, graph.as_str()),
        }
    }
}

fn canonical_hash(triple: &Triple, graph: Option<&NamedNode>) -> u64 {
    let mut hasher = FxHasher::default();
    Canonical { triple, graph }.to_string().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::Literal;

    fn example_triple() -> Triple {
        Triple::new(
            NamedNode::new_unchecked("http://example.com/s").into(),
            NamedNode::new_unchecked("http://example.com/p").into(),
            Literal::new_simple_literal("o").into(),
        )
    }

    #[test]
    fn hash_is_computed_from_canonical_string() {
        let quad = Quad::new(example_triple(), None);

        let mut hasher = FxHasher::default();
        quad.to_string().hash(&mut hasher);
        assert_eq!(quad.hash, hasher.finish());
    }

    #[test]
    fn try_new_without_triple_fails() {
        let result = Quad::try_new(None, None);
        assert!(matches!(result, Err(QuadError::MissingTriple)));
    }

    #[test]
    fn clones_share_the_triple() {
        let quad = Quad::new(example_triple(), None);
        let clone = quad.clone();
        assert!(Arc::ptr_eq(quad.as_triple(), clone.as_triple()));
    }

    #[test]
    fn copy_to_other_graph_shares_the_triple() {
        let quad = Quad::new(example_triple(), None);
        let copy = quad.copy_to(Some(NamedNode::new_unchecked("http://example.com/g")));

        assert!(matches!(copy, Cow::Owned(_)));
        assert!(Arc::ptr_eq(quad.as_triple(), copy.as_triple()));
    }
}
