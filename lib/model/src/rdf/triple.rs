use crate::Term;
use std::fmt::{Display, Formatter};

/// An ordered (subject, predicate, object) statement.
///
/// The predicate is expected to be a named node. This is not enforced here, it is the
/// responsibility of whoever produces the triple (usually a parser).
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Triple {
    subject: Term,
    predicate: Term,
    object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    pub fn object(&self) -> &Term {
        &self.object
    }

    /// Returns the subject, predicate, and object, in this order.
    pub fn nodes(&self) -> [&Term; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    /// Returns whether `term` occurs in any position of this triple.
    pub fn involves(&self, term: &Term) -> bool {
        self.nodes().into_iter().any(|node| node == term)
    }

    /// A triple is ground if it contains no blank nodes, no variables, and no non-ground graph
    /// literals.
    pub fn is_ground(&self) -> bool {
        self.nodes().into_iter().all(Term::is_ground)
    }
}

impl Display for Triple {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
