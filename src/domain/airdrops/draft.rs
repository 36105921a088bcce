use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;

use super::airdrop::{AirdropStatus, NewAirdrop};
use crate::domain::validation::ValidationError;

static LEADING_FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex")
});

/// Reward as typed into the form: either a bare number or free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RewardInput {
    Number(f64),
    Text(String),
}

/// Raw airdrop form input before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirdropDraft {
    pub name: Option<String>,
    pub categories: Option<Vec<String>>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub notes: Option<String>,
    pub link: Option<String>,
    pub reward: Option<RewardInput>,
    pub selected_wallet: Option<String>,
    pub selected_twitter: Option<String>,
    pub selected_discord: Option<String>,
    pub selected_telegram: Option<String>,
    pub selected_email: Option<String>,
}

impl AirdropDraft {
    pub fn normalize(self) -> Result<NewAirdrop, ValidationError> {
        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            return Err(ValidationError::Required("name"));
        }

        let status = match non_blank(self.status) {
            None => AirdropStatus::default(),
            Some(s) => s
                .parse::<AirdropStatus>()
                .map_err(|_| ValidationError::UnknownStatus(s))?,
        };

        let date = match non_blank(self.date) {
            None => None,
            Some(d) => Some(
                NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidDate(d))?,
            ),
        };

        Ok(NewAirdrop {
            name,
            categories: clean_categories(self.categories.unwrap_or_default()),
            status,
            date,
            notes: non_blank(self.notes),
            link: non_blank(self.link),
            reward: self.reward.and_then(parse_reward),
            selected_wallet: parse_reference("selected_wallet", self.selected_wallet)?,
            selected_twitter: parse_reference("selected_twitter", self.selected_twitter)?,
            selected_discord: parse_reference("selected_discord", self.selected_discord)?,
            selected_telegram: parse_reference("selected_telegram", self.selected_telegram)?,
            selected_email: parse_reference("selected_email", self.selected_email)?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn clean_categories(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for c in raw {
        let c = c.trim();
        if !c.is_empty() && !out.iter().any(|existing| existing == c) {
            out.push(c.to_string());
        }
    }
    out
}

fn parse_reward(input: RewardInput) -> Option<f64> {
    let value = match input {
        RewardInput::Number(n) => n,
        RewardInput::Text(s) => parse_leading_float(&s)?,
    };
    value.is_finite().then_some(value)
}

/// Longest numeric prefix of `s` after leading whitespace, e.g. `"12.5 usd"` -> 12.5.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let m = LEADING_FLOAT_RE.find(trimmed)?;
    m.as_str().parse::<f64>().ok()
}

fn parse_reference(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<Uuid>, ValidationError> {
    match value.filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => Uuid::parse_str(v.trim())
            .map(Some)
            .map_err(|_| ValidationError::InvalidReference { field, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> AirdropDraft {
        AirdropDraft {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            draft("   ").normalize(),
            Err(ValidationError::Required("name"))
        );
        assert_eq!(
            AirdropDraft::default().normalize(),
            Err(ValidationError::Required("name"))
        );
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let mut d = draft("LayerZero");
        d.date = Some("  ".into());
        d.notes = Some("".into());
        d.link = Some(" \t".into());
        d.reward = Some(RewardInput::Text("   ".into()));
        d.selected_wallet = Some(String::new());
        let n = d.normalize().unwrap();
        assert_eq!(n.status, AirdropStatus::Ongoing);
        assert!(n.categories.is_empty());
        assert_eq!(n.date, None);
        assert_eq!(n.notes, None);
        assert_eq!(n.link, None);
        assert_eq!(n.reward, None);
        assert_eq!(n.selected_wallet, None);
    }

    #[test]
    fn keeps_non_blank_values_as_given() {
        let wallet = Uuid::new_v4();
        let mut d = draft("zkSync");
        d.status = Some("claimed".into());
        d.date = Some("2024-03-01".into());
        d.notes = Some(" bridge weekly ".into());
        d.link = Some("https://zksync.io".into());
        d.selected_wallet = Some(wallet.to_string());
        d.categories = Some(vec!["Testnet".into(), " Testnet ".into(), "".into(), "Node".into()]);
        let n = d.normalize().unwrap();
        assert_eq!(n.status, AirdropStatus::Claimed);
        assert_eq!(n.date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(n.notes.as_deref(), Some(" bridge weekly "));
        assert_eq!(n.link.as_deref(), Some("https://zksync.io"));
        assert_eq!(n.selected_wallet, Some(wallet));
        assert_eq!(n.categories, vec!["Testnet".to_string(), "Node".to_string()]);
    }

    #[test]
    fn reward_uses_leading_float_semantics() {
        let cases = [
            ("42", Some(42.0)),
            ("12.5usd", Some(12.5)),
            ("  .75", Some(0.75)),
            ("-3", Some(-3.0)),
            ("1e2", Some(100.0)),
            ("abc", None),
            ("$10", None),
        ];
        for (input, expected) in cases {
            let mut d = draft("x");
            d.reward = Some(RewardInput::Text(input.into()));
            assert_eq!(d.normalize().unwrap().reward, expected, "input {input:?}");
        }

        let mut d = draft("x");
        d.reward = Some(RewardInput::Number(19.99));
        assert_eq!(d.normalize().unwrap().reward, Some(19.99));
    }

    #[test]
    fn rejects_unknown_status_bad_date_and_bad_reference() {
        let mut d = draft("x");
        d.status = Some("pending".into());
        assert!(matches!(
            d.normalize(),
            Err(ValidationError::UnknownStatus(_))
        ));

        let mut d = draft("x");
        d.date = Some("01/03/2024".into());
        assert!(matches!(d.normalize(), Err(ValidationError::InvalidDate(_))));

        let mut d = draft("x");
        d.selected_discord = Some("not-a-uuid".into());
        assert!(matches!(
            d.normalize(),
            Err(ValidationError::InvalidReference {
                field: "selected_discord",
                ..
            })
        ));
    }
}
