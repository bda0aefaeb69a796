use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
pub enum GuestStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
pub enum MenuType {
    #[default]
    Standard,
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    #[sqlx(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Lactose-Free")]
    #[sqlx(rename = "Lactose-Free")]
    LactoseFree,
}

/// Transport and lodging arrangement requested by a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
pub enum Needs {
    #[default]
    Autonomous,
    #[serde(rename = "Bus-Only")]
    #[sqlx(rename = "Bus-Only")]
    BusOnly,
    #[serde(rename = "Bus-And-Hotel")]
    #[sqlx(rename = "Bus-And-Hotel")]
    BusAndHotel,
    #[serde(rename = "Hotel-Only")]
    #[sqlx(rename = "Hotel-Only")]
    HotelOnly,
}

/// Which wedding nights the guest needs a room for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
pub enum NightsNeeded {
    Both,
    #[serde(rename = "21-Only")]
    #[sqlx(rename = "21-Only")]
    TwentyFirstOnly,
    #[serde(rename = "22-Only")]
    #[sqlx(rename = "22-Only")]
    TwentySecondOnly,
    #[default]
    None,
}

/// One invited person. `invitation_id` is nullable: the foreign key is
/// ON DELETE SET NULL, so a guest can outlive its invitation.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Guest {
    pub guest_id: i64,
    pub invitation_id: Option<i64>,
    pub full_name: String,
    pub menu_type: MenuType,
    pub menu_kids: bool,
    pub needs: Needs,
    pub status: GuestStatus,
    pub nights_needed: NightsNeeded,
    pub estimated_participation: bool,
}

/// Insert payload. The store assigns `guest_id`.
#[derive(Debug, Clone)]
pub struct NewGuest {
    pub invitation_id: i64,
    pub full_name: String,
    pub menu_type: MenuType,
    pub menu_kids: bool,
    pub needs: Needs,
    pub status: GuestStatus,
    pub nights_needed: NightsNeeded,
    pub estimated_participation: bool,
}

/// Partial per-guest update. `None` leaves the field untouched.
#[derive(Debug, Clone)]
pub struct GuestPatch {
    pub guest_id: i64,
    pub full_name: Option<String>,
    pub menu_type: Option<MenuType>,
    pub menu_kids: Option<bool>,
    pub needs: Option<Needs>,
    pub status: Option<GuestStatus>,
    pub nights_needed: Option<NightsNeeded>,
    pub estimated_participation: Option<bool>,
}
