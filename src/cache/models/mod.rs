// 缓存数据模型模块

pub mod user;

pub use user::CachedUser;
