pub mod engine;
pub mod matcher;

pub use engine::solve;
pub use matcher::AnagramQuery;
