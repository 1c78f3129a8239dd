use serde::{Deserialize, Serialize};

use crate::routes::user::User;

/// 用户缓存数据模型
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedUser {
    pub username: String,
    pub email: String,
    pub created_at: i64, // Unix timestamp
}

impl From<&User> for CachedUser {
    fn from(user: &User) -> Self {
        CachedUser {
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn cached_user_mirrors_the_row() {
        let user = User {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };

        let cached = CachedUser::from(&user);
        assert_eq!(cached.username, "alice");
        assert_eq!(cached.email, "alice@example.com");
        assert_eq!(cached.created_at, 1_700_000_000);
    }

    #[test]
    fn cached_user_survives_the_wire_format() {
        let cached = CachedUser {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            created_at: 1_700_000_000,
        };

        let json = serde_json::to_string(&cached).unwrap();
        let back: CachedUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back.username, cached.username);
        assert_eq!(back.email, cached.email);
        assert_eq!(back.created_at, cached.created_at);
    }
}
