//! Invited friend endpoints

use super::client::ApiClient;
use crate::models::{InvitedFriend, InvitedFriendRequest};
use crate::utils::errors::Result;

impl ApiClient {
    pub async fn invited_friends(&self) -> Result<Vec<InvitedFriend>> {
        self.get_json("new-friends").await
    }

    pub async fn create_invited_friend(&self, request: &InvitedFriendRequest) -> Result<()> {
        self.post_json("new-friends", request).await
    }

    pub async fn update_invited_friend(
        &self,
        friend_id: i64,
        request: &InvitedFriendRequest,
    ) -> Result<()> {
        self.put_json(&format!("new-friends/{}", friend_id), request)
            .await
    }

    pub async fn delete_invited_friend(&self, friend_id: i64) -> Result<()> {
        self.delete(&format!("new-friends/{}", friend_id)).await
    }
}
