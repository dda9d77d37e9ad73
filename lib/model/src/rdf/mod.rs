mod graph_literal;
mod quad;
mod term;
mod triple;

pub use graph_literal::GraphLiteral;
pub use quad::Quad;
pub use term::Term;
pub use triple::Triple;
