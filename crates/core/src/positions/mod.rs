//! Position records from the margin replica source.

mod positions_model;
mod positions_traits;

pub use positions_model::PositionRecord;
pub use positions_traits::PositionRepositoryTrait;
