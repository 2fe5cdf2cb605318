//! Signup, profile edit and plan upgrade for the local identity.

use chrono::Utc;
use tracing::{debug, info};

use linkfeed_shared::Identity;

use crate::error::Result;
use crate::store::Store;

impl Store {
    /// Create and install a new identity on the Free plan.
    pub fn sign_up(&mut self, display_name: &str) -> Result<Identity> {
        let identity = Identity::sign_up(display_name, &self.avatar_service, Utc::now())?;
        info!(user_id = %identity.id, name = %identity.display_name, "Signed up");
        self.identity = Some(identity.clone());
        Ok(identity)
    }

    /// Replace display name and avatar. No-op when nobody is signed in.
    pub fn update_profile(&mut self, display_name: &str, avatar: &str) -> Result<()> {
        let Some(identity) = self.identity.as_mut() else {
            debug!("profile update ignored, no identity");
            return Ok(());
        };
        identity.rename(display_name, avatar)?;
        info!(user_id = %identity.id, name = %identity.display_name, "Profile updated");
        Ok(())
    }

    /// Switch the identity to the Pro plan. Returns `false` when nobody is
    /// signed in.
    pub fn upgrade(&mut self) -> bool {
        let Some(identity) = self.identity.as_mut() else {
            debug!("upgrade ignored, no identity");
            return false;
        };
        identity.upgrade();
        info!(user_id = %identity.id, "Upgraded to Pro");
        true
    }
}
