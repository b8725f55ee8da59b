mod agent;
pub mod evaluate;
pub mod minimax;
mod random;

pub use agent::{Agent, MinimaxAgent};
pub use evaluate::{evaluate, Score};
pub use minimax::{minimax, SearchResult};
pub use random::RandomAgent;
