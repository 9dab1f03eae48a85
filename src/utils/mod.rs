//! Small helpers shared by the client: nested JSON lookups and per-instance memoization

pub mod memo;
pub mod nested;

pub use memo::Memoized;
pub use nested::access_nested_map;
