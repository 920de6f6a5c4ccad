pub mod context;
pub mod session;
pub mod state;

pub use context::{use_search, SearchContext};
pub use state::{Dropdown, SearchState, SearchStatus};
