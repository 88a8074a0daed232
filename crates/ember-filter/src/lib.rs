//! Ember Filter - record filtering for the content editor
//!
//! A composite filter tree over tabular records. Leaf nodes hold a
//! [`Predicate`] over one column; list nodes combine their children with
//! all/any semantics. Nodes live in an arena and refer to each other by
//! [`FilterId`], so parents are plain indices rather than pointers.

mod predicate;
mod tree;

pub use predicate::Predicate;
pub use tree::{FilterId, FilterTree, Op};
