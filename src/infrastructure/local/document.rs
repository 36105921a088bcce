use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::application::ports::kv_store::KvStore;

pub const USERS_KEY: &str = "users";

pub fn airdrops_key(user_id: Uuid) -> String {
    format!("airdrops-data:{user_id}")
}

pub fn settings_key(user_id: Uuid) -> String {
    format!("user-settings:{user_id}")
}

pub fn theme_key(user_id: Uuid) -> String {
    format!("theme:{user_id}")
}

pub async fn load<T, S>(store: &S, key: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
{
    match store.get(key).await? {
        None => Ok(None),
        Some(raw) => {
            let value = serde_json::from_str(&raw)
                .map_err(|e| anyhow::anyhow!("corrupt document under {key}: {e}"))?;
            Ok(Some(value))
        }
    }
}

pub async fn save<T, S>(store: &S, key: &str, value: &T) -> anyhow::Result<()>
where
    T: Serialize,
    S: KvStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}
