use crate::domain::models::{
    auth::RefreshTokenRecord,
    guest::{Guest, GuestPatch, NewGuest},
    invitation::Invitation,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_refresh_family(&self, family_id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Invitation>, AppError>;
    async fn list(&self) -> Result<Vec<Invitation>, AppError>;
    /// Persists the invitation row (name, derived status, comment) and the
    /// guest patch batch as one atomic unit.
    async fn update_with_guests(&self, invitation: &Invitation, patches: &[GuestPatch]) -> Result<(), AppError>;
    /// Removes the invitation and all guests still attached to it.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn create(&self, guest: &NewGuest) -> Result<Guest, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Guest>, AppError>;
    async fn list(&self) -> Result<Vec<Guest>, AppError>;
    async fn list_by_invitation(&self, invitation_id: i64) -> Result<Vec<Guest>, AppError>;
    /// All patches commit or none do. A patch addressing a missing guest
    /// aborts the batch with `NotFound`.
    async fn update_many(&self, patches: &[GuestPatch]) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
