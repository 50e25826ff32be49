//! Participant entity model.

use serde::{Deserialize, Serialize};

use checkin_core::error::AppError;
use checkin_core::result::AppResult;
use checkin_core::traits::IdentityInfo;

/// An exam account: issued judge-system credentials, optionally bound to
/// a participant's external id.
///
/// Accounts are provisioned ahead of time. A provisioned account with no
/// external id is a blank slot; binding it is a one-time, irreversible
/// transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Provisioning slot number (document key).
    pub slot: u32,
    /// External participant id (student number), `None` while blank.
    pub external_id: Option<i64>,
    /// Display name, `None` while blank.
    pub name: Option<String>,
    /// Judge-system username.
    pub username: String,
    /// Judge-system password.
    pub password: String,
}

impl Participant {
    /// Creates a blank, unbound account slot.
    pub fn blank(slot: u32, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            slot,
            external_id: None,
            name: None,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Whether this slot has been bound to an external id.
    pub fn is_bound(&self) -> bool {
        self.external_id.is_some()
    }

    /// Binds this blank slot to `external_id`, taking the name from `identity`.
    pub fn bind(&mut self, external_id: i64, identity: &IdentityInfo) -> AppResult<()> {
        if let Some(existing) = self.external_id {
            return Err(AppError::conflict(format!(
                "account slot {} already bound to {existing}",
                self.slot
            )));
        }
        self.external_id = Some(external_id);
        self.name = Some(identity.name.clone());
        Ok(())
    }

    /// Display name, empty for a blank slot.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
