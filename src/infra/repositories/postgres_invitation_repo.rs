use crate::domain::{
    models::{guest::GuestPatch, invitation::Invitation},
    ports::InvitationRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresInvitationRepo {
    pool: PgPool,
}

impl PostgresInvitationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PostgresInvitationRepo {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        sqlx::query_as::<_, Invitation>(
            "INSERT INTO invitations (invitation_id, name, status, comment) VALUES ($1, $2, $3, $4) RETURNING invitation_id, name, status, comment",
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
            "SELECT invitation_id, name, status, comment FROM invitations WHERE invitation_id = $1",
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
            "UPDATE invitations SET name = $1, status = $2, comment = $3 WHERE invitation_id = $4",
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
                    full_name = COALESCE($1, full_name),
                    menu_type = COALESCE($2, menu_type),
                    menu_kids = COALESCE($3, menu_kids),
                    needs = COALESCE($4, needs),
                    status = COALESCE($5, status),
                    nights_needed = COALESCE($6, nights_needed),
                    estimated_participation = COALESCE($7, estimated_participation)
                 WHERE guest_id = $8",
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

        sqlx::query("DELETE FROM guests WHERE invitation_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM invitations WHERE invitation_id = $1")
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
