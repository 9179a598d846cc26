pub use board::*;
pub use errors::*;
pub use minimax::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod minimax;
mod visualization;
