mod error;
mod factory;
mod namespace;
mod rdf;
pub mod vocab;

pub use error::*;
pub use factory::*;
pub use namespace::*;
pub use rdf::*;

// Re-export some oxrdf types.
pub use oxrdf::{BlankNode, GraphName, Literal, NamedNode, Variable};
