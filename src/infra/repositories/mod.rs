pub mod postgres_auth_repo;
pub mod postgres_guest_repo;
pub mod postgres_invitation_repo;
pub mod postgres_user_repo;
pub mod sqlite_auth_repo;
pub mod sqlite_guest_repo;
pub mod sqlite_invitation_repo;
pub mod sqlite_user_repo;
