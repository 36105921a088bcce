use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AirdropStatus {
    #[default]
    Ongoing,
    Completed,
    Claimed,
}

impl AirdropStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AirdropStatus::Ongoing => "ongoing",
            AirdropStatus::Completed => "completed",
            AirdropStatus::Claimed => "claimed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AirdropStatus::Ongoing => "Ongoing",
            AirdropStatus::Completed => "Completed",
            AirdropStatus::Claimed => "Claimed",
        }
    }
}

impl fmt::Display for AirdropStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AirdropStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ongoing" => Ok(AirdropStatus::Ongoing),
            "completed" => Ok(AirdropStatus::Completed),
            "claimed" => Ok(AirdropStatus::Claimed),
            other => anyhow::bail!("unknown airdrop status: {other}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airdrop {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub categories: Vec<String>,
    pub status: AirdropStatus,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub link: Option<String>,
    pub reward: Option<f64>,
    pub selected_wallet: Option<Uuid>,
    pub selected_twitter: Option<Uuid>,
    pub selected_discord: Option<Uuid>,
    pub selected_telegram: Option<Uuid>,
    pub selected_email: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Normalized field set written on create and on update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAirdrop {
    pub name: String,
    pub categories: Vec<String>,
    pub status: AirdropStatus,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub link: Option<String>,
    pub reward: Option<f64>,
    pub selected_wallet: Option<Uuid>,
    pub selected_twitter: Option<Uuid>,
    pub selected_discord: Option<Uuid>,
    pub selected_telegram: Option<Uuid>,
    pub selected_email: Option<Uuid>,
}

impl Airdrop {
    pub fn from_new(
        id: Uuid,
        user_id: Uuid,
        fields: NewAirdrop,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name: fields.name,
            categories: fields.categories,
            status: fields.status,
            date: fields.date,
            notes: fields.notes,
            link: fields.link,
            reward: fields.reward,
            selected_wallet: fields.selected_wallet,
            selected_twitter: fields.selected_twitter,
            selected_discord: fields.selected_discord,
            selected_telegram: fields.selected_telegram,
            selected_email: fields.selected_email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every editable field, keeping identity and creation time.
    pub fn apply(&mut self, fields: NewAirdrop, now: chrono::DateTime<chrono::Utc>) {
        self.name = fields.name;
        self.categories = fields.categories;
        self.status = fields.status;
        self.date = fields.date;
        self.notes = fields.notes;
        self.link = fields.link;
        self.reward = fields.reward;
        self.selected_wallet = fields.selected_wallet;
        self.selected_twitter = fields.selected_twitter;
        self.selected_discord = fields.selected_discord;
        self.selected_telegram = fields.selected_telegram;
        self.selected_email = fields.selected_email;
        self.updated_at = now;
    }

    /// Reward counted towards earnings: only claimed airdrops that carry one.
    pub fn claimed_reward(&self) -> Option<f64> {
        match self.status {
            AirdropStatus::Claimed => self.reward,
            _ => None,
        }
    }
}
