pub use chain::{Combinator, Links, SelectorChain};
pub use compound::CompoundSelector;
pub(crate) use parse::SelectorParser;
pub use simple::{Attribute, AttributeOp, Namespace, Pseudo, QualifiedName, SimpleSelector};

mod chain;
mod compound;
mod parse;
mod simple;
