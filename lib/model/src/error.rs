use thiserror::Error;

/// An error raised while constructing a [Quad](crate::Quad).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuadError {
    /// No triple was supplied. This is a bug of the caller.
    #[error("Cannot create a quad without a triple.")]
    MissingTriple,
}

/// An error raised by the [NestedNamespaceMapper](crate::NestedNamespaceMapper).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum NamespaceError {
    /// [decrement_nesting](crate::NestedNamespaceMapper::decrement_nesting) was called at
    /// nesting level 0.
    #[error("Cannot decrement the nesting level below 0, there is no nested scope to close.")]
    ScopeUnderflow,
    /// The prefix of a qualified name is not bound in any active scope.
    #[error("The namespace for the prefix '{0}' is not defined in any active scope.")]
    UndefinedPrefix(String),
    /// The given string is not of the form `prefix:local`.
    #[error("'{0}' is not a qualified name.")]
    InvalidQName(String),
}
