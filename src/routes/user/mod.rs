mod handler;
mod model;

pub use handler::{create_user, delete_user, get_user, list_users, update_email};
pub use model::{User, UserInfo};
