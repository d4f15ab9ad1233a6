//! Static timeline content and its presentation helpers.

pub mod posts;
pub mod timestamp;
