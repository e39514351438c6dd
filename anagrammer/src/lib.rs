pub mod config;
pub mod errors;
pub mod hint;
pub mod results;
pub mod solver;
pub mod wordlist;

pub use config::SolverConfig;
pub use errors::{SolverError, SolverResult};
pub use hint::HintPattern;
pub use results::{MatchList, SortOrder};
pub use solver::{solve, AnagramQuery};
pub use wordlist::WordList;
