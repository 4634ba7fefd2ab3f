//! Prime-broker reported margins from the pbactual source.

mod pbactual_model;
mod pbactual_traits;

pub use pbactual_model::PbActualRecord;
pub use pbactual_traits::PbActualRepositoryTrait;
