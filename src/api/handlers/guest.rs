use axum::{extract::{State, Path}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateGuestRequest, UpdateGuestRequest};
use crate::api::handlers::invitation::validate_invitation_id;
use crate::domain::models::guest::{GuestPatch, GuestStatus, NewGuest};
use crate::domain::models::invitation::Invitation;
use crate::domain::services::rsvp::derive_invitation_status;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let guests = state.guest_repo.list().await?;
    Ok(Json(guests))
}

pub async fn create_guest(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(invitation_id): Path<i64>,
    Json(payload): Json<CreateGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_invitation_id(invitation_id)?;

    if payload.full_name.trim().is_empty() {
        return Err(AppError::Validation("Full name must not be empty".into()));
    }

    state.invitation_repo.find_by_id(invitation_id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    let guest = NewGuest {
        invitation_id,
        full_name: payload.full_name,
        menu_type: payload.menu_type.unwrap_or_default(),
        menu_kids: payload.menu_kids.unwrap_or(false),
        needs: payload.needs.unwrap_or_default(),
        status: payload.status.unwrap_or_default(),
        nights_needed: payload.nights_needed.unwrap_or_default(),
        estimated_participation: payload.estimated_participation.unwrap_or(true),
    };

    let created = state.guest_repo.create(&guest).await?;

    info!("Created guest {} on invitation {}", created.guest_id, invitation_id);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "guest_id": created.guest_id })),
    ))
}

/// Single-guest partial edit. When the guest belongs to an invitation, the
/// invitation's aggregate status is re-derived from the sibling set and
/// persisted in the same transaction as the guest row.
pub async fn update_guest(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(guest_id): Path<i64>,
    Json(payload): Json<UpdateGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let guest = state.guest_repo.find_by_id(guest_id).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    let patch = GuestPatch {
        guest_id,
        full_name: payload.full_name,
        menu_type: payload.menu_type,
        menu_kids: payload.menu_kids,
        needs: payload.needs,
        status: payload.status,
        nights_needed: payload.nights_needed,
        estimated_participation: payload.estimated_participation,
    };

    match guest.invitation_id {
        Some(invitation_id) => {
            let invitation = state.invitation_repo.find_by_id(invitation_id).await?
                .ok_or(AppError::NotFound("Invitation not found".into()))?;

            let siblings = state.guest_repo.list_by_invitation(invitation_id).await?;
            let statuses: Vec<GuestStatus> = siblings
                .iter()
                .map(|g| {
                    if g.guest_id == guest_id {
                        patch.status.unwrap_or(g.status)
                    } else {
                        g.status
                    }
                })
                .collect();
            let status = derive_invitation_status(&statuses);

            let updated = Invitation { status, ..invitation };
            state.invitation_repo
                .update_with_guests(&updated, std::slice::from_ref(&patch))
                .await?;
        }
        None => {
            state.guest_repo.update_many(std::slice::from_ref(&patch)).await?;
        }
    }

    let updated = state.guest_repo.find_by_id(guest_id).await?
        .ok_or(AppError::Internal)?;

    info!("Updated guest {}", guest_id);

    Ok(Json(updated))
}

pub async fn delete_guest(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(guest_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.guest_repo.delete(guest_id).await?;
    info!("Deleted guest {}", guest_id);
    Ok(StatusCode::NO_CONTENT)
}
