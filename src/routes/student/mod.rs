mod handler;
mod model;

pub use handler::{create_student, get_student};
pub use model::Student;
