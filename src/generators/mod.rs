mod recur_backtrack;

pub use recur_backtrack::{connect, recursive_backtrack, unvisited_neighbors};
