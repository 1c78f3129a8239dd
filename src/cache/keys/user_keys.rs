/// 用户信息缓存键前缀
const USER_INFO_PREFIX: &str = "user:info:";

/// 生成用户信息缓存键
pub fn user_info_key(username: &str) -> String {
    format!("{}{}", USER_INFO_PREFIX, username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_key_is_prefixed_with_username() {
        assert_eq!(user_info_key("alice"), "user:info:alice");
        assert_eq!(user_info_key(""), "user:info:");
    }
}
