//! Repository for the `ad_users` table.
//!
//! Reads join `locations` to serve `location_name` directly; writes
//! resolve `location_name` get-or-create inside a transaction.

use adboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::ad_user::{AdUser, CreateAdUser, UpdateAdUser};
use crate::repositories::LocationRepo;

/// Joined projection shared across read queries.
const COLUMNS: &str = "u.id, u.first_name, u.last_name, u.username, u.password, u.role, \
                        u.age, l.name AS location_name, u.created_at, u.updated_at";

const FROM: &str = "FROM ad_users u LEFT JOIN locations l ON l.id = u.location_id";

/// Provides CRUD operations for users.
pub struct AdUserRepo;

impl AdUserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// `role` falls back to the schema default (`member`) when omitted. A
    /// supplied `location_name` is resolved get-or-create in the same
    /// transaction as the insert.
    pub async fn create(pool: &PgPool, input: &CreateAdUser) -> Result<AdUser, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let location_id = match &input.location_name {
            Some(name) => Some(LocationRepo::get_or_create(&mut tx, name).await?),
            None => None,
        };

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO ad_users (first_name, last_name, username, password, role, age, location_id)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'member'), $6, $7)
             RETURNING id",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.username)
        .bind(&input.password)
        .bind(&input.role)
        .bind(input.age)
        .bind(location_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        let user = Self::find_by_id(pool, id).await?;
        user.ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AdUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE u.id = $1");
        sqlx::query_as::<_, AdUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of users ordered ascending by username.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AdUser>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM}
             ORDER BY u.username ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, AdUser>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of user rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM ad_users")
            .fetch_one(pool)
            .await
    }

    /// Replace a user's fields, re-resolving the location reference.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdUser,
    ) -> Result<Option<AdUser>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<DbId> = sqlx::query_scalar("SELECT id FROM ad_users WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let location_id = match &input.location_name {
            Some(name) => Some(LocationRepo::get_or_create(&mut tx, name).await?),
            None => None,
        };

        sqlx::query(
            "UPDATE ad_users SET
                first_name = $2,
                last_name = $3,
                username = $4,
                password = $5,
                role = $6,
                age = $7,
                location_id = $8,
                updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.username)
        .bind(&input.password)
        .bind(&input.role)
        .bind(input.age)
        .bind(location_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Self::find_by_id(pool, id).await
    }

    /// Delete a user. Authored ads cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ad_users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
