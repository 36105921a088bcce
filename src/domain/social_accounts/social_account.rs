use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Discord,
    Telegram,
    Email,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::Twitter,
        SocialPlatform::Discord,
        SocialPlatform::Telegram,
        SocialPlatform::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Discord => "discord",
            SocialPlatform::Telegram => "telegram",
            SocialPlatform::Email => "email",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(SocialPlatform::Twitter),
            "discord" => Ok(SocialPlatform::Discord),
            "telegram" => Ok(SocialPlatform::Telegram),
            "email" => Ok(SocialPlatform::Email),
            other => anyhow::bail!("unknown social platform: {other}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub platform: SocialPlatform,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
