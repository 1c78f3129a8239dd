// 路由模块
// 每个子模块对应一类资源

pub mod grade;
pub mod student;
pub mod user;
