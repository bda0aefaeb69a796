use std::sync::Arc;
use crate::domain::ports::{
    AuthRepository, GuestRepository, InvitationRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub invitation_repo: Arc<dyn InvitationRepository>,
    pub guest_repo: Arc<dyn GuestRepository>,
    pub auth_repo: Arc<dyn AuthRepository>,
    pub auth_service: Arc<AuthService>,
}
