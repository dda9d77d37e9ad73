use crate::Triple;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// An immutable sub-graph that is embedded as a single term (e.g., a Notation3 formula).
///
/// The triples are kept sorted and without duplicates. Hence, the derived equality is set
/// equality and two equal graph literals always hash alike.
///
/// Triples are ordered by their canonical string. As IRIs are not validated, distinct triples may
/// share a canonical string (e.g., `<a> <b> <c>` split at different spaces), so ties are broken by
/// the [Debug] form, which keeps the term boundaries.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct GraphLiteral {
    triples: Arc<[Triple]>,
}

impl GraphLiteral {
    /// Creates the empty sub-graph.
    pub fn new() -> Self {
        Self {
            triples: Vec::new().into(),
        }
    }

    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        let mut triples = triples.into_iter().collect::<Vec<_>>();
        triples.sort_by_cached_key(|triple| (triple.to_string(), format!("{triple:?}")));
        triples.dedup();
        Self {
            triples: triples.into(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Returns whether every contained triple is ground.
    pub fn is_ground(&self) -> bool {
        self.triples.iter().all(Triple::is_ground)
    }
}

impl Default for GraphLiteral {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Triple> for GraphLiteral {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Self::from_triples(iter)
    }
}

impl<'a> IntoIterator for &'a GraphLiteral {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for GraphLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for triple in self.triples.iter() {
            write!(f, " {triple}")?;
        }
        f.write_str(" }")
    }
}
