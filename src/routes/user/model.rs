use chrono::{DateTime, Utc};
use redis::Client as RedisClient;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::cache::models::user::CachedUser;
use crate::cache::operations::user::UserCacheOperations;

#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// 对外返回的用户信息，数据库路径和缓存路径共用同一结构
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub email: String,
    pub created_at: i64, // Unix timestamp
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at.timestamp(),
        }
    }
}

impl From<CachedUser> for UserInfo {
    fn from(cached: CachedUser) -> Self {
        UserInfo {
            username: cached.username,
            email: cached.email,
            created_at: cached.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmailRequest {
    pub email: String,
}

/// 用户名只允许使用字母、数字和下划线
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty() && username.chars().all(|c| c.is_alphanumeric() || c == '_')
}

impl User {
    pub async fn create(pool: &PgPool, req: CreateUserRequest) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, created_at)
            VALUES ($1, $2, NOW())
            RETURNING username, email, created_at
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT username, email, created_at
            FROM users
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT username, email, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// 带缓存的单用户查询
    /// 命中缓存时不访问数据库；缓存出错按未命中处理，不影响请求
    pub async fn find_by_username_cached(
        pool: &PgPool,
        redis: &Arc<RedisClient>,
        username: &str,
    ) -> Result<Option<UserInfo>, sqlx::Error> {
        match UserCacheOperations::get_cached_user(redis, username).await {
            Ok(Some(cached)) => {
                tracing::debug!("User cache hit: {}", username);
                return Ok(Some(cached.into()));
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Redis error while reading user {}: {}", username, e);
            }
        }

        let user = Self::find_by_username(pool, username).await?;

        // 查到后回填缓存，失败只记录日志
        if let Some(ref user) = user {
            if let Err(e) = UserCacheOperations::cache_user(redis, user).await {
                tracing::warn!("Failed to cache user {}: {}", user.username, e);
            }
        }

        Ok(user.as_ref().map(UserInfo::from))
    }

    /// 更新邮箱，成功后清除对应的缓存条目
    pub async fn update_email(
        pool: &PgPool,
        redis: &Arc<RedisClient>,
        username: &str,
        email: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = $2
            WHERE username = $1
            RETURNING username, email, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(pool)
        .await?;

        if updated.is_some() {
            if let Err(e) = UserCacheOperations::remove_user_from_cache(redis, username).await {
                tracing::warn!("Failed to invalidate user cache for {}: {}", username, e);
            }
        }

        Ok(updated)
    }

    /// 删除用户，成功后清除对应的缓存条目
    /// 用户不存在时不触碰缓存
    pub async fn delete(
        pool: &PgPool,
        redis: &Arc<RedisClient>,
        username: &str,
    ) -> Result<bool, sqlx::Error> {
        let deleted = sqlx::query_scalar::<_, String>(
            r#"
            DELETE FROM users
            WHERE username = $1
            RETURNING username
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        match deleted {
            Some(_) => {
                if let Err(e) = UserCacheOperations::remove_user_from_cache(redis, username).await {
                    tracing::warn!("Failed to invalidate user cache for {}: {}", username, e);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn username_charset_is_restricted() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("alice_01"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("alice bob"));
        assert!(!is_valid_username("alice@example"));
    }

    #[test]
    fn user_info_is_identical_from_row_and_cache() {
        let user = User {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };

        let from_row = UserInfo::from(&user);
        let from_cache = UserInfo::from(CachedUser::from(&user));

        assert_eq!(
            serde_json::to_value(&from_row).unwrap(),
            serde_json::to_value(&from_cache).unwrap()
        );
    }
}
