use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Invitation-level rollup of the guests' individual RSVP answers.
/// Stored and serialized with the human-readable labels the frontend shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
pub enum InvitationStatus {
    #[default]
    Pending,
    #[serde(rename = "Partially Accepted")]
    #[sqlx(rename = "Partially Accepted")]
    PartiallyAccepted,
    Accepted,
    Declined,
}

/// One invitation sent to a household. The id doubles as the code guests
/// type in to look up their invitation, hence the 6-digit range.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Invitation {
    pub invitation_id: i64,
    pub name: String,
    pub status: InvitationStatus,
    pub comment: String,
}

impl Invitation {
    /// Draws a random 6-digit id. The primary-key constraint catches a
    /// collision; the creating handler redraws and retries.
    pub fn new(name: String, status: InvitationStatus, comment: String) -> Self {
        Self {
            invitation_id: rand::thread_rng().gen_range(100_000..=999_999),
            name,
            status,
            comment,
        }
    }
}

pub const MIN_INVITATION_ID: i64 = 100_000;
pub const MAX_INVITATION_ID: i64 = 999_999;
