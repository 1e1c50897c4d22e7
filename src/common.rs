mod dialect;
mod drive;
mod errors;
mod normalizer;
mod path;
mod resolver;

pub(crate) mod ancestry;
pub(crate) mod parser;

#[cfg(test)]
mod proptests;

pub use dialect::*;
pub use drive::*;
pub use errors::*;
pub use normalizer::*;
pub use path::*;
pub use resolver::*;
