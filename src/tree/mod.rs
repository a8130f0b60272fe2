//! Arena-based binary search trees: plain BST and AVL-balanced variant.

pub mod arena;
pub mod balance;
pub mod display;
pub mod search;

pub use arena::{Balancing, Node, Tree};
