use crate::domain::models::{guest::GuestStatus, invitation::InvitationStatus};

/// Rolls the guests' individual answers up into the invitation status.
///
/// Rule order is fixed and the first match wins: an empty guest set is
/// `Pending`; a unanimous set is `Accepted` or `Declined`; everything else,
/// including a set where every guest is still `Pending`, is
/// `Partially Accepted`.
pub fn derive_invitation_status(statuses: &[GuestStatus]) -> InvitationStatus {
    if statuses.is_empty() {
        return InvitationStatus::Pending;
    }
    if statuses.iter().all(|s| *s == GuestStatus::Accepted) {
        return InvitationStatus::Accepted;
    }
    if statuses.iter().all(|s| *s == GuestStatus::Declined) {
        return InvitationStatus::Declined;
    }
    InvitationStatus::PartiallyAccepted
}
