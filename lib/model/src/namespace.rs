use crate::vocab::namespaces;
use crate::NamespaceError;
use oxrdf::NamedNode;
use std::collections::{BTreeMap, BTreeSet};

/// Maps prefixes to namespace IRIs across nested lexical scopes.
///
/// Parsers and serializers of nested formats (e.g., RDF/XML) call
/// [increment_nesting](Self::increment_nesting) when entering an element and
/// [decrement_nesting](Self::decrement_nesting) when leaving it. A prefix that is bound in an
/// inner scope shadows the bindings of the same prefix in the outer scopes. Once the inner scope
/// is closed, the outer binding becomes visible again.
///
/// Each scope is stored as a separate level, so closing a scope only touches the bindings of that
/// scope. The mapper is meant to be owned by a single traversal and is not synchronized.
#[derive(Clone, Debug, Default)]
pub struct NestedNamespaceMapper {
    /// The bindings of nesting level 0.
    root: BTreeMap<String, String>,
    /// `nested[i]` holds the bindings made at nesting level `i + 1`.
    nested: Vec<BTreeMap<String, String>>,
}

impl NestedNamespaceMapper {
    /// Creates a mapper at nesting level 0 without any bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapper that binds `rdf`, `rdfs`, and `xsd` at nesting level 0.
    pub fn with_default_namespaces() -> Self {
        let mut mapper = Self::new();
        mapper.add_namespace("rdf", namespaces::RDF);
        mapper.add_namespace("rdfs", namespaces::RDFS);
        mapper.add_namespace("xsd", namespaces::XSD);
        mapper
    }

    /// Returns the current nesting level. The outermost scope has level 0.
    pub fn nesting_level(&self) -> usize {
        self.nested.len()
    }

    /// Opens a new, empty scope.
    pub fn increment_nesting(&mut self) {
        self.nested.push(BTreeMap::new());
        tracing::debug!(level = self.nesting_level(), "Opened namespace scope");
    }

    /// Closes the current scope and drops all bindings made in it.
    ///
    /// Returns [NamespaceError::ScopeUnderflow] at nesting level 0. In this case the mapper is
    /// not changed.
    pub fn decrement_nesting(&mut self) -> Result<(), NamespaceError> {
        let level = self.nesting_level();
        let dropped = self.nested.pop().ok_or(NamespaceError::ScopeUnderflow)?;
        tracing::debug!(level, dropped = dropped.len(), "Closed namespace scope");
        Ok(())
    }

    /// Binds `prefix` to `iri` in the current scope.
    ///
    /// An existing binding of `prefix` in the current scope is replaced, bindings in outer
    /// scopes are shadowed.
    pub fn add_namespace(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        let prefix = prefix.into();
        let iri = iri.into();
        tracing::trace!(level = self.nesting_level(), %prefix, %iri, "Bound namespace prefix");
        self.current_level_mut().insert(prefix, iri);
    }

    /// Removes the binding of `prefix` from the current scope.
    ///
    /// Bindings in outer scopes are not affected. Returns whether a binding was removed.
    pub fn remove_namespace(&mut self, prefix: &str) -> bool {
        self.current_level_mut().remove(prefix).is_some()
    }

    /// Imports the visible bindings of `other` into the current scope.
    ///
    /// A prefix that already resolves to the same namespace is skipped and a prefix that is only
    /// bound in an outer scope is shadowed. If the current scope binds the prefix to a different
    /// namespace, that binding is kept and the imported namespace is bound to the next free
    /// prefix of the form `ns0`, `ns1`, and so on.
    pub fn import(&mut self, other: &NestedNamespaceMapper) {
        let mut bindings = other.visible_bindings();
        bindings.sort_unstable();

        let mut next_id = 0_usize;
        for (prefix, namespace) in bindings {
            if self.namespace_uri(prefix) == Some(namespace) {
                continue;
            }

            if self.current_level().contains_key(prefix) {
                let renamed = loop {
                    let candidate = format!("ns{next_id}");
                    next_id += 1;
                    if !self.has_namespace(&candidate) {
                        break candidate;
                    }
                };
                tracing::debug!(%prefix, %renamed, "Renamed colliding prefix on import");
                self.add_namespace(renamed, namespace);
            } else {
                self.add_namespace(prefix, namespace);
            }
        }
    }

    /// Returns the namespace IRI that `prefix` currently resolves to.
    pub fn namespace_uri(&self, prefix: &str) -> Option<&str> {
        self.levels()
            .rev()
            .find_map(|level| level.get(prefix))
            .map(String::as_str)
    }

    pub fn has_namespace(&self, prefix: &str) -> bool {
        self.namespace_uri(prefix).is_some()
    }

    /// Returns whether any visible prefix resolves to `iri`.
    pub fn has_namespace_uri(&self, iri: &str) -> bool {
        self.prefix_for(iri).is_some()
    }

    /// Returns a visible prefix that resolves to `iri`, preferring inner scopes.
    pub fn prefix_for(&self, iri: &str) -> Option<&str> {
        self.visible_bindings()
            .into_iter()
            .find_map(|(prefix, namespace)| (namespace == iri).then_some(prefix))
    }

    /// Returns the level at which `prefix` currently resolves, i.e., the innermost level that
    /// binds it. Returns `None` if no active scope binds `prefix`.
    pub fn nesting_level_of(&self, prefix: &str) -> Option<usize> {
        self.nested
            .iter()
            .rposition(|level| level.contains_key(prefix))
            .map(|index| index + 1)
            .or_else(|| self.root.contains_key(prefix).then_some(0))
    }

    /// Returns all prefixes that are bound in any active scope, sorted and without duplicates.
    pub fn prefixes(&self) -> Vec<&str> {
        self.levels()
            .flat_map(BTreeMap::keys)
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Expands a qualified name of the form `prefix:local` into a named node.
    ///
    /// The resulting IRI is not validated.
    pub fn expand_qname(&self, qname: &str) -> Result<NamedNode, NamespaceError> {
        let (prefix, local) = qname
            .split_once(':')
            .ok_or_else(|| NamespaceError::InvalidQName(qname.to_owned()))?;
        let namespace = self
            .namespace_uri(prefix)
            .ok_or_else(|| NamespaceError::UndefinedPrefix(prefix.to_owned()))?;
        Ok(NamedNode::new_unchecked(format!("{namespace}{local}")))
    }

    /// Tries to abbreviate `iri` as a qualified name using the visible bindings.
    ///
    /// The longest matching namespace wins. On a tie, inner scopes win over outer scopes.
    /// Namespaces that would leave a `/`, `#`, or `:` in the local part are skipped, as is the
    /// degenerate qualified name `:`. The local part is not checked any further, e.g., it may
    /// start with a digit.
    pub fn reduce_to_qname(&self, iri: &str) -> Option<String> {
        self.visible_bindings()
            .into_iter()
            .filter_map(|(prefix, namespace)| {
                let local = iri.strip_prefix(namespace)?;
                let is_valid =
                    !local.contains(['/', '#', ':']) && !(prefix.is_empty() && local.is_empty());
                is_valid.then_some((namespace.len(), prefix, local))
            })
            .reduce(|best, candidate| if candidate.0 > best.0 { candidate } else { best })
            .map(|(_, prefix, local)| format!("{prefix}:{local}"))
    }

    /// Removes all bindings and returns to nesting level 0.
    pub fn clear(&mut self) {
        self.root.clear();
        self.nested.clear();
    }

    /// Returns the bindings that are not shadowed, innermost scope first.
    fn visible_bindings(&self) -> Vec<(&str, &str)> {
        let mut seen = BTreeSet::new();
        self.levels()
            .rev()
            .flat_map(|level| level.iter())
            .filter(|(prefix, _)| seen.insert(prefix.as_str()))
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
            .collect()
    }

    /// Returns all levels, outermost first.
    fn levels(&self) -> impl DoubleEndedIterator<Item = &BTreeMap<String, String>> {
        std::iter::once(&self.root).chain(self.nested.iter())
    }

    fn current_level(&self) -> &BTreeMap<String, String> {
        self.nested.last().unwrap_or(&self.root)
    }

    fn current_level_mut(&mut self) -> &mut BTreeMap<String, String> {
        match self.nested.last_mut() {
            Some(level) => level,
            None => &mut self.root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "http://example.com/a#";
    const B: &str = "http://example.com/b#";

    #[test]
    fn starts_empty_at_level_zero() {
        let mapper = NestedNamespaceMapper::new();
        assert_eq!(mapper.nesting_level(), 0);
        assert!(mapper.prefixes().is_empty());
        assert_eq!(mapper.nesting_level_of("ex"), None);
    }

    #[test]
    fn rebinding_in_same_scope_replaces() {
        let mut mapper = NestedNamespaceMapper::new();
        mapper.add_namespace("ex", A);
        mapper.add_namespace("ex", B);

        assert_eq!(mapper.namespace_uri("ex"), Some(B));
        assert_eq!(mapper.nesting_level_of("ex"), Some(0));
    }

    #[test]
    fn remove_only_affects_current_scope() {
        let mut mapper = NestedNamespaceMapper::new();
        mapper.add_namespace("ex", A);
        mapper.increment_nesting();
        mapper.add_namespace("ex", B);

        assert!(mapper.remove_namespace("ex"));
        assert_eq!(mapper.namespace_uri("ex"), Some(A));
        assert!(!mapper.remove_namespace("ex"));
        assert_eq!(mapper.namespace_uri("ex"), Some(A));
    }

    #[test]
    fn visible_bindings_skip_shadowed() {
        let mut mapper = NestedNamespaceMapper::new();
        mapper.add_namespace("ex", A);
        mapper.increment_nesting();
        mapper.add_namespace("ex", B);

        assert_eq!(mapper.visible_bindings(), vec![("ex", B)]);
        assert!(!mapper.has_namespace_uri(A));
        assert_eq!(mapper.prefix_for(B), Some("ex"));
    }

    #[test]
    fn reduce_prefers_longest_namespace() {
        let mut mapper = NestedNamespaceMapper::new();
        mapper.add_namespace("ex", "http://example.com/");
        mapper.add_namespace("exv", "http://example.com/vocab/");

        assert_eq!(
            mapper.reduce_to_qname("http://example.com/vocab/name"),
            Some("exv:name".to_owned())
        );
    }

    #[test]
    fn reduce_rejects_invalid_local_parts() {
        let mut mapper = NestedNamespaceMapper::new();
        mapper.add_namespace("ex", "http://example.com/");
        mapper.add_namespace("", "http://example.org/");

        assert_eq!(mapper.reduce_to_qname("http://example.com/a/b"), None);
        assert_eq!(mapper.reduce_to_qname("http://example.com/a#b"), None);
        assert_eq!(mapper.reduce_to_qname("http://example.org/"), None);
        assert_eq!(
            mapper.reduce_to_qname("http://example.org/x"),
            Some(":x".to_owned())
        );
    }

    #[test]
    fn clear_resets_nesting() {
        let mut mapper = NestedNamespaceMapper::with_default_namespaces();
        mapper.increment_nesting();
        mapper.add_namespace("ex", A);
        mapper.clear();

        assert_eq!(mapper.nesting_level(), 0);
        assert!(mapper.prefixes().is_empty());
    }
}
