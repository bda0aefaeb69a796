use crate::domain::models::{guest::Guest, invitation::Invitation};
use serde::Serialize;

#[derive(Serialize)]
pub struct InvitationWithGuests {
    #[serde(flatten)]
    pub invitation: Invitation,
    pub guests: Vec<Guest>,
}
