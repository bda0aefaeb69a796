use crate::domain::{
    models::guest::{Guest, GuestPatch, NewGuest},
    ports::GuestRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresGuestRepo {
    pool: PgPool,
}

impl PostgresGuestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestRepository for PostgresGuestRepo {
    async fn create(&self, guest: &NewGuest) -> Result<Guest, AppError> {
        sqlx::query_as::<_, Guest>(
            "INSERT INTO guests (invitation_id, full_name, menu_type, menu_kids, needs, status, nights_needed, estimated_participation)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
            .bind(guest.invitation_id)
            .bind(&guest.full_name)
            .bind(guest.menu_type)
            .bind(guest.menu_kids)
            .bind(guest.needs)
            .bind(guest.status)
            .bind(guest.nights_needed)
            .bind(guest.estimated_participation)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Guest>, AppError> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE guest_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Guest>, AppError> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_invitation(&self, invitation_id: i64) -> Result<Vec<Guest>, AppError> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE invitation_id = $1")
            .bind(invitation_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_many(&self, patches: &[GuestPatch]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

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
        let result = sqlx::query("DELETE FROM guests WHERE guest_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Guest not found".into()));
        }
        Ok(())
    }
}
