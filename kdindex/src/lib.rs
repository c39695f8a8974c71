//! A k-dimensional tree over `f64` coordinate vectors supporting insertion, lazy deletion,
//! exact-match lookup, axis aligned range queries and nearest neighbour queries.
//!
//! The tree is a plain single threaded structure: mutation takes `&mut self` and no locking
//! happens internally. Values are generic, store references (`KDTree<&T>`) to keep
//! ownership with the caller.

pub mod config;
pub mod distance;
pub mod error;
pub mod heap;
pub mod kdtree;
mod node;
mod query;

#[cfg(test)]
mod tests;

pub use config::KDTreeConfig;
pub use error::Error;
pub use kdtree::KDTree;
pub use node::Lookup;
