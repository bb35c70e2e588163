//! Repository for the `ads` and `ad_categories` tables.
//!
//! Ad writes are multi-step (author resolution, location get-or-create,
//! category attachment) and run inside a single transaction so a failure
//! at any step leaves no partial row behind.

use adboard_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::ad::{Ad, AdDetail, AdLogo, CreateAd, UpdateAd};
use crate::repositories::{CategoryRepo, LocationRepo};

/// Joined projection shared across read queries.
const COLUMNS: &str = "a.id, a.name, a.price, a.description, a.logo, a.is_published, \
                        a.author_id, l.name AS location_name, a.created_at, a.updated_at";

const FROM: &str = "FROM ads a LEFT JOIN locations l ON l.id = a.location_id";

/// Error from a transactional ad write.
#[derive(Debug, thiserror::Error)]
pub enum AdWriteError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),

    /// The payload referenced an author that does not exist.
    #[error("author {0} not found")]
    AuthorNotFound(DbId),
}

/// Provides CRUD operations for ads and their category set.
pub struct AdRepo;

impl AdRepo {
    /// Insert a new ad with its author, location, and category set.
    ///
    /// Runs in one transaction: a missing author rolls back everything,
    /// including any categories or location created earlier in the flow.
    pub async fn create(pool: &PgPool, input: &CreateAd) -> Result<AdDetail, AdWriteError> {
        let mut tx = pool.begin().await?;

        check_author(&mut tx, input.author_id).await?;
        let location_id = LocationRepo::get_or_create(&mut tx, &input.location_name).await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO ads (name, price, description, is_published, author_id, location_id)
             VALUES ($1, $2, $3, COALESCE($4, false), $5, $6)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.description)
        .bind(input.is_published)
        .bind(input.author_id)
        .bind(location_id)
        .fetch_one(&mut *tx)
        .await?;

        attach_categories(&mut tx, id, &input.categories).await?;

        tx.commit().await?;

        let detail = Self::find_detail(pool, id).await?;
        detail.ok_or(AdWriteError::Db(sqlx::Error::RowNotFound))
    }

    /// Find an ad with its category names resolved.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<AdDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE a.id = $1");
        let ad = sqlx::query_as::<_, Ad>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match ad {
            Some(ad) => {
                let categories = Self::category_names(pool, ad.id).await?;
                Ok(Some(AdDetail { ad, categories }))
            }
            None => Ok(None),
        }
    }

    /// One page of ads with categories resolved.
    ///
    /// `sort` supports `"price"` (default) and `"name"`, both descending.
    pub async fn list_page(
        pool: &PgPool,
        sort: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AdDetail>, sqlx::Error> {
        let order_clause = match sort {
            "name" => "a.name DESC",
            _ => "a.price DESC",
        };

        let query = format!(
            "SELECT {COLUMNS} {FROM}
             ORDER BY {order_clause}
             LIMIT $1 OFFSET $2"
        );
        let ads = sqlx::query_as::<_, Ad>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let mut items = Vec::with_capacity(ads.len());
        for ad in ads {
            let categories = Self::category_names(pool, ad.id).await?;
            items.push(AdDetail { ad, categories });
        }
        Ok(items)
    }

    /// Total number of ad rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM ads")
            .fetch_one(pool)
            .await
    }

    /// Replace an ad's fields, re-resolve author and location, and replace
    /// the category set with exactly the names in the payload.
    ///
    /// Returns `None` if no ad with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAd,
    ) -> Result<Option<AdDetail>, AdWriteError> {
        let mut tx = pool.begin().await?;

        let exists: Option<DbId> = sqlx::query_scalar("SELECT id FROM ads WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        check_author(&mut tx, input.author_id).await?;
        let location_id = LocationRepo::get_or_create(&mut tx, &input.location_name).await?;

        sqlx::query(
            "UPDATE ads SET
                name = $2,
                price = $3,
                description = $4,
                is_published = $5,
                author_id = $6,
                location_id = $7,
                updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.description)
        .bind(input.is_published)
        .bind(input.author_id)
        .bind(location_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM ad_categories WHERE ad_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        attach_categories(&mut tx, id, &input.categories).await?;

        tx.commit().await?;

        Ok(Self::find_detail(pool, id).await?)
    }

    /// Set only the `logo` column.
    ///
    /// Returns `None` if no ad with the given `id` exists.
    pub async fn update_logo(
        pool: &PgPool,
        id: DbId,
        logo: &str,
    ) -> Result<Option<AdLogo>, sqlx::Error> {
        sqlx::query_as::<_, AdLogo>(
            "UPDATE ads SET logo = $2, updated_at = now()
             WHERE id = $1
             RETURNING id, name, logo",
        )
        .bind(id)
        .bind(logo)
        .fetch_optional(pool)
        .await
    }

    /// Delete an ad. Join rows in `ad_categories` cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Category names attached to an ad, ordered by name.
    pub async fn category_names(pool: &PgPool, ad_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT c.name FROM categories c
             JOIN ad_categories ac ON ac.category_id = c.id
             WHERE ac.ad_id = $1
             ORDER BY c.name ASC",
        )
        .bind(ad_id)
        .fetch_all(pool)
        .await
    }
}

/// Fail with [`AdWriteError::AuthorNotFound`] unless the user exists.
async fn check_author(conn: &mut PgConnection, author_id: DbId) -> Result<(), AdWriteError> {
    let exists: Option<DbId> = sqlx::query_scalar("SELECT id FROM ad_users WHERE id = $1")
        .bind(author_id)
        .fetch_optional(conn)
        .await?;
    match exists {
        Some(_) => Ok(()),
        None => Err(AdWriteError::AuthorNotFound(author_id)),
    }
}

/// Get-or-create each category by name and attach it to the ad.
///
/// Duplicate names in the payload resolve to the same row; the join insert
/// is idempotent.
async fn attach_categories(
    conn: &mut PgConnection,
    ad_id: DbId,
    names: &[String],
) -> Result<(), sqlx::Error> {
    for name in names {
        let category_id = CategoryRepo::get_or_create(&mut *conn, name).await?;
        sqlx::query(
            "INSERT INTO ad_categories (ad_id, category_id)
             VALUES ($1, $2)
             ON CONFLICT (ad_id, category_id) DO NOTHING",
        )
        .bind(ad_id)
        .bind(category_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
