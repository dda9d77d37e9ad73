//! Well-known vocabularies.

pub use oxrdf::vocab::{rdf, rdfs, xsd};

/// Namespace IRIs of well-known vocabularies, as bound by
/// [NestedNamespaceMapper::with_default_namespaces](crate::NestedNamespaceMapper::with_default_namespaces).
pub mod namespaces {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
}
