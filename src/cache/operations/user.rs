use redis::{AsyncCommands, Client as RedisClient};
use std::sync::Arc;

use crate::cache::keys::user_keys;
use crate::cache::models::user::CachedUser;
use crate::routes::user::User;

// 用户缓存过期时间，单位秒
const USER_CACHE_EXPIRE: u64 = 3600;

/// 用户缓存操作
pub struct UserCacheOperations;

impl UserCacheOperations {
    /// 将用户信息缓存到 Redis
    pub async fn cache_user(
        redis: &Arc<RedisClient>,
        user: &User,
    ) -> Result<(), redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let cached_user = CachedUser::from(user);

        let key = user_keys::user_info_key(&user.username);
        let json = serde_json::to_string(&cached_user).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::IoError,
                "Serialization error",
                e.to_string(),
            ))
        })?;

        let _: () = conn.set_ex(key, json, USER_CACHE_EXPIRE).await?;

        Ok(())
    }

    /// 从 Redis 获取用户信息
    pub async fn get_cached_user(
        redis: &Arc<RedisClient>,
        username: &str,
    ) -> Result<Option<CachedUser>, redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let key = user_keys::user_info_key(username);
        let result: Option<String> = conn.get(key).await?;

        match result {
            Some(json) => {
                let cached_user = serde_json::from_str(&json).map_err(|e| {
                    redis::RedisError::from((
                        redis::ErrorKind::IoError,
                        "Deserialization error",
                        e.to_string(),
                    ))
                })?;
                Ok(Some(cached_user))
            }
            None => Ok(None),
        }
    }

    /// 从缓存中删除用户
    pub async fn remove_user_from_cache(
        redis: &Arc<RedisClient>,
        username: &str,
    ) -> Result<(), redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let key = user_keys::user_info_key(username);
        let _: () = conn.del(key).await?;

        Ok(())
    }
}
