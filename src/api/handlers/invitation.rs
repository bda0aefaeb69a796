use axum::{extract::{State, Path}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateInvitationRequest, UpdateInvitationRequest};
use crate::api::dtos::responses::InvitationWithGuests;
use crate::domain::models::guest::{GuestPatch, GuestStatus};
use crate::domain::models::invitation::{Invitation, MAX_INVITATION_ID, MIN_INVITATION_ID};
use crate::domain::services::rsvp::derive_invitation_status;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

// Collisions on a 6-digit id are rare but real; redraw a few times before
// giving up.
const MAX_ID_ATTEMPTS: u32 = 5;

pub(crate) fn validate_invitation_id(id: i64) -> Result<(), AppError> {
    if !(MIN_INVITATION_ID..=MAX_INVITATION_ID).contains(&id) {
        return Err(AppError::Validation("Invalid invitationId".into()));
    }
    Ok(())
}

pub async fn list_invitations(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let invitations = state.invitation_repo.list().await?;

    let mut result = Vec::with_capacity(invitations.len());
    for invitation in invitations {
        let guests = state.guest_repo.list_by_invitation(invitation.invitation_id).await?;
        result.push(InvitationWithGuests { invitation, guests });
    }

    Ok(Json(result))
}

pub async fn create_invitation(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(payload): Json<CreateInvitationRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name must not be empty".into()));
    }

    let status = payload.status.unwrap_or_default();
    let comment = payload.comment.unwrap_or_default();

    let mut attempt = 0;
    let created = loop {
        let invitation = Invitation::new(payload.name.clone(), status, comment.clone());
        match state.invitation_repo.create(&invitation).await {
            Ok(created) => break created,
            Err(e) if e.is_unique_violation() && attempt + 1 < MAX_ID_ATTEMPTS => {
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    };

    info!("Created invitation {}", created.invitation_id);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "invitation_id": created.invitation_id })),
    ))
}

pub async fn get_invitation(
    State(state): State<Arc<AppState>>,
    Path(invitation_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    validate_invitation_id(invitation_id)?;

    let invitation = state.invitation_repo.find_by_id(invitation_id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    let guests = state.guest_repo.list_by_invitation(invitation_id).await?;

    Ok(Json(InvitationWithGuests { invitation, guests }))
}

pub async fn list_invitation_guests(
    State(state): State<Arc<AppState>>,
    Path(invitation_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    validate_invitation_id(invitation_id)?;

    state.invitation_repo.find_by_id(invitation_id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    let guests = state.guest_repo.list_by_invitation(invitation_id).await?;
    Ok(Json(guests))
}

/// Household-facing bulk RSVP. Unauthenticated: knowing the 6-digit
/// invitation id is the access credential.
///
/// The aggregate status is re-derived from the invitation's full guest set
/// with the incoming patches applied, never taken from the payload, and is
/// persisted together with the guest batch in one transaction.
pub async fn update_invitation(
    State(state): State<Arc<AppState>>,
    Path(invitation_id): Path<i64>,
    Json(payload): Json<UpdateInvitationRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_invitation_id(invitation_id)?;

    let invitation = state.invitation_repo.find_by_id(invitation_id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    let guests = state.guest_repo.list_by_invitation(invitation_id).await?;

    for patch in &payload.guests {
        if !guests.iter().any(|g| g.guest_id == patch.guest_id) {
            return Err(AppError::Validation("Some guests are not in the invitation".into()));
        }
    }

    let statuses: Vec<GuestStatus> = guests
        .iter()
        .map(|g| {
            payload.guests.iter()
                .find(|p| p.guest_id == g.guest_id)
                .and_then(|p| p.status)
                .unwrap_or(g.status)
        })
        .collect();
    let status = derive_invitation_status(&statuses);

    let updated = Invitation {
        status,
        comment: payload.comment.unwrap_or_default(),
        ..invitation
    };
    let patches: Vec<GuestPatch> = payload.guests.into_iter().map(GuestPatch::from).collect();

    state.invitation_repo.update_with_guests(&updated, &patches).await?;

    info!("Updated invitation {} ({} guests)", invitation_id, patches.len());

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_invitation(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(invitation_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    validate_invitation_id(invitation_id)?;

    state.invitation_repo.find_by_id(invitation_id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    state.invitation_repo.delete(invitation_id).await?;

    info!("Deleted invitation {}", invitation_id);

    Ok(StatusCode::NO_CONTENT)
}
