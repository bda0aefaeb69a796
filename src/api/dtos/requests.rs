use crate::domain::models::guest::{GuestPatch, GuestStatus, MenuType, Needs, NightsNeeded};
use crate::domain::models::invitation::InvitationStatus;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateInvitationRequest {
    pub name: String,
    pub status: Option<InvitationStatus>,
    pub comment: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateGuestRequest {
    pub full_name: String,
    pub menu_type: Option<MenuType>,
    pub menu_kids: Option<bool>,
    pub needs: Option<Needs>,
    pub status: Option<GuestStatus>,
    pub nights_needed: Option<NightsNeeded>,
    pub estimated_participation: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateGuestRequest {
    pub full_name: Option<String>,
    pub menu_type: Option<MenuType>,
    pub menu_kids: Option<bool>,
    pub needs: Option<Needs>,
    pub status: Option<GuestStatus>,
    pub nights_needed: Option<NightsNeeded>,
    pub estimated_participation: Option<bool>,
}

/// Household-facing bulk RSVP payload: one comment plus a partial update
/// per guest. Absent fields leave the guest's current value in place.
#[derive(Deserialize)]
pub struct UpdateInvitationRequest {
    pub comment: Option<String>,
    pub guests: Vec<GuestPatchRequest>,
}

#[derive(Deserialize)]
pub struct GuestPatchRequest {
    pub guest_id: i64,
    pub full_name: Option<String>,
    pub menu_type: Option<MenuType>,
    pub menu_kids: Option<bool>,
    pub needs: Option<Needs>,
    pub status: Option<GuestStatus>,
    pub nights_needed: Option<NightsNeeded>,
    pub estimated_participation: Option<bool>,
}

impl From<GuestPatchRequest> for GuestPatch {
    fn from(req: GuestPatchRequest) -> Self {
        GuestPatch {
            guest_id: req.guest_id,
            full_name: req.full_name,
            menu_type: req.menu_type,
            menu_kids: req.menu_kids,
            needs: req.needs,
            status: req.status,
            nights_needed: req.nights_needed,
            estimated_participation: req.estimated_participation,
        }
    }
}
