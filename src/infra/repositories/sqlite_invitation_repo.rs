use crate::domain::{
    models::{guest::GuestPatch, invitation::Invitation},
    ports::InvitationRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteInvitationRepo {
    pool: SqlitePool,
}

impl SqliteInvitationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for SqliteInvitationRepo {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        sqlx::query_as::<_, Invitation>(
            "INSERT INTO invitations (invitation_id, name, status, comment) VALUES (?, ?, ?, ?) RETURNING invitation_id, name, status, comment",
        )
            .bind(invitation.invitation_id)
            .bind(&invitation.name)
            .bind(invitation.status)
            .bind(&invitation.comment)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT invitation_id, name, status, comment FROM invitations WHERE invitation_id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT invitation_id, name, status, comment FROM invitations",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_with_guests(&self, invitation: &Invitation, patches: &[GuestPatch]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let result = sqlx::query(
            "UPDATE invitations SET name = ?, status = ?, comment = ? WHERE invitation_id = ?",
        )
            .bind(&invitation.name)
            .bind(invitation.status)
            .bind(&invitation.comment)
            .bind(invitation.invitation_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Invitation not found".into()));
        }

        for patch in patches {
            let result = sqlx::query(
                "UPDATE guests SET
                    full_name = COALESCE(?, full_name),
                    menu_type = COALESCE(?, menu_type),
                    menu_kids = COALESCE(?, menu_kids),
                    needs = COALESCE(?, needs),
                    status = COALESCE(?, status),
                    nights_needed = COALESCE(?, nights_needed),
                    estimated_participation = COALESCE(?, estimated_participation)
                 WHERE guest_id = ?",
            )
                .bind(&patch.full_name)
                .bind(patch.menu_type)
                .bind(patch.menu_kids)
                .bind(patch.needs)
                .bind(patch.status)
                .bind(patch.nights_needed)
                .bind(patch.estimated_participation)
                .bind(patch.guest_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;

            if result.rows_affected() == 0 {
                return Err(AppError::NotFound(format!("Guest {} not found", patch.guest_id)));
            }
        }

        tx.commit().await.map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM guests WHERE invitation_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM invitations WHERE invitation_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Invitation not found".into()));
        }

        tx.commit().await.map_err(AppError::Database)
    }
}
