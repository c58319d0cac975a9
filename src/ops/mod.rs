pub mod capacity;
pub mod check;
pub mod grid;
pub mod queue;
pub mod schedule;
pub mod search;
pub mod urgency;

pub use capacity::*;
pub use check::*;
pub use grid::*;
pub use queue::*;
pub use schedule::*;
pub use search::*;
pub use urgency::*;
