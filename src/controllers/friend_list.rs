//! Invited-friend list screen, with inline edit and delete

use chrono::NaiveDate;
use tracing::warn;

use crate::api::ApiClient;
use crate::models::{InvitedFriend, InvitedFriendRequest};
use crate::utils::errors::{Result, RollcallError};
use crate::utils::logging;

#[derive(Debug, Clone)]
pub struct FriendListController {
    api: ApiClient,
    friends: Vec<InvitedFriend>,
    search_term: String,
    loaded: bool,
    error: Option<String>,
}

impl FriendListController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            friends: Vec::new(),
            search_term: String::new(),
            loaded: false,
            error: None,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        let friends = match self.api.invited_friends().await {
            Ok(friends) => friends,
            Err(e) => {
                logging::log_api_error("invited_friends", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };
        self.friends = friends;
        self.loaded = true;
        self.error = None;
        Ok(())
    }

    /// Update one friend's details, then re-fetch the list regardless of the
    /// outcome
    pub async fn update(
        &mut self,
        friend_id: i64,
        name: &str,
        birth: NaiveDate,
        phone: &str,
        student_id: i64,
    ) -> Result<()> {
        if name.trim().is_empty() || phone.trim().is_empty() {
            return Err(RollcallError::Validation(
                "모든 필드를 입력해주세요.".to_string(),
            ));
        }

        let request = InvitedFriendRequest {
            name: name.trim().to_string(),
            birth,
            phone: phone.trim().to_string(),
            student_id,
        };
        let outcome = self.api.update_invited_friend(friend_id, &request).await;
        if let Err(e) = &outcome {
            logging::log_api_error("update_invited_friend", &e.to_string(), None);
            self.error = Some(e.user_message());
        }
        if let Err(e) = self.load().await {
            warn!(error = %e, "Re-fetch after mutation failed, keeping stale view");
        }
        outcome
    }

    /// Delete one friend, then re-fetch the list regardless of the outcome
    pub async fn remove(&mut self, friend_id: i64) -> Result<()> {
        let outcome = self.api.delete_invited_friend(friend_id).await;
        if let Err(e) = &outcome {
            logging::log_api_error("delete_invited_friend", &e.to_string(), None);
            self.error = Some(e.user_message());
        }
        if let Err(e) = self.load().await {
            warn!(error = %e, "Re-fetch after mutation failed, keeping stale view");
        }
        outcome
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Friends whose own name or referrer name matches the search
    pub fn visible(&self) -> Vec<&InvitedFriend> {
        let needle = self.search_term.to_lowercase();
        self.friends
            .iter()
            .filter(|friend| {
                friend.name.to_lowercase().contains(&needle)
                    || friend
                        .student_name
                        .as_deref()
                        .map(|name| name.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .collect()
    }

    pub fn friends(&self) -> &[InvitedFriend] {
        &self.friends
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
