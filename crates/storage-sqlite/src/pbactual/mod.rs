mod model;
mod repository;

pub use model::PbActualDB;
pub use repository::PbActualRepository;
