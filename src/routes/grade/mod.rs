mod handler;
mod model;

pub use handler::{create_grade, update_grade};
pub use model::Grade;
