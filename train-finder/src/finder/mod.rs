//! Train finder.
//!
//! Answers one question over a loaded dataset: "which three trains from
//! this station to that one are best by price, arrival or departure?"
//!
//! Matching trains keep their file order until ranked, and ranking uses a
//! stable sort, so trains with equal keys come out in file order.

mod criteria;
mod search;

pub use criteria::{Criteria, UnknownCriteria};
pub use search::{
    BEST_TRAINS_COUNT, Endpoint, FindError, Query, TrainFinder, find_best_trains, rank_trains,
};
