use std::collections::HashMap;

use thiserror::Error;

use crate::models::{AttributionStatus, DirectoryStats, UserProfile};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("duplicate user identifier in dataset: {0}")]
    DuplicateId(String),
}

/// The fixed in-memory directory of attribution profiles.
///
/// Built once at startup from a `ProfileSource` and immutable afterwards:
/// every operation takes `&self`, so the directory can sit behind an `Arc`
/// in the app state with no locking.
#[derive(Debug)]
pub struct UserDirectory {
    users: Vec<UserProfile>,
    /// Both identifier kinds share one lookup namespace; values are
    /// positions into `users`.
    index: HashMap<String, usize>,
}

impl UserDirectory {
    /// Index the profiles by `sdk_strong_id` and `advertiser_user_id`.
    /// Any identifier appearing on two different profiles is rejected.
    pub fn new(users: Vec<UserProfile>) -> Result<Self, DatasetError> {
        let mut index = HashMap::new();
        for (position, user) in users.iter().enumerate() {
            index_key(&mut index, &user.sdk_strong_id, position)?;
            if let Some(advertiser_id) = &user.advertiser_user_id {
                index_key(&mut index, advertiser_id, position)?;
            }
        }
        Ok(Self { users, index })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Full list, in dataset order, for the tabular view.
    pub fn all(&self) -> &[UserProfile] {
        &self.users
    }

    /// Exact lookup by either identifier kind.
    pub fn get(&self, id: &str) -> Option<&UserProfile> {
        self.index.get(id).map(|&position| &self.users[position])
    }

    /// Case-insensitive substring search over the tracking id, the
    /// advertiser id, and the wallet list (so a pasted wallet fragment
    /// finds its user). Blank queries match nothing; rejecting them with a
    /// client error is the route layer's job.
    pub fn search(&self, query: &str) -> Vec<&UserProfile> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.users
            .iter()
            .filter(|user| matches(user, &needle))
            .collect()
    }

    /// First search hit in dataset order, backing the explainer's
    /// one-record lookup flow.
    pub fn find_first(&self, query: &str) -> Option<&UserProfile> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.users.iter().find(|user| matches(user, &needle))
    }

    pub fn stats(&self) -> DirectoryStats {
        let total_users = self.users.len();
        let mut attributed = 0usize;
        let mut not_attributed = 0usize;
        let mut partial = 0usize;
        let mut total_attributed_ftd = 0u32;
        let mut total_attributed_ftd_value = 0.0f64;
        let mut total_attributed_purchases = 0u32;
        let mut total_attributed_purchase_value = 0.0f64;

        for user in &self.users {
            match user.attribution.status {
                AttributionStatus::Attributed => attributed += 1,
                AttributionStatus::NotAttributed => not_attributed += 1,
                AttributionStatus::Partial => partial += 1,
            }
            total_attributed_ftd += user.total_attributed_ftd;
            total_attributed_ftd_value += user.total_attributed_ftd_value;
            total_attributed_purchases += user.total_attributed_purchase;
            total_attributed_purchase_value += user.total_attributed_purchase_value;
        }

        // Rate counts fully attributed users only; partial credit is
        // reported separately.
        let attribution_rate = if total_users == 0 {
            0.0
        } else {
            attributed as f64 / total_users as f64 * 100.0
        };

        DirectoryStats {
            total_users,
            attributed,
            not_attributed,
            partial,
            attribution_rate,
            total_attributed_ftd,
            total_attributed_ftd_value,
            total_attributed_purchases,
            total_attributed_purchase_value,
        }
    }
}

fn index_key(
    index: &mut HashMap<String, usize>,
    key: &str,
    position: usize,
) -> Result<(), DatasetError> {
    if let Some(previous) = index.insert(key.to_string(), position) {
        // A profile listing its own id twice is harmless; two profiles
        // sharing an id is not.
        if previous != position {
            return Err(DatasetError::DuplicateId(key.to_string()));
        }
    }
    Ok(())
}

fn matches(user: &UserProfile, needle: &str) -> bool {
    user.sdk_strong_id.to_lowercase().contains(needle)
        || user
            .advertiser_user_id
            .as_deref()
            .map_or(false, |id| id.to_lowercase().contains(needle))
        || user.all_wallets.to_lowercase().contains(needle)
}
