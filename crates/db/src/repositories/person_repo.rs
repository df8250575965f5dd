//! Repository for the `persons` table.

use persons_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list for `persons` queries.
const COLUMNS: &str = "id, name, age, address, work";

/// Provides CRUD operations for persons.
pub struct PersonRepo;

impl PersonRepo {
    /// List all persons, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons ORDER BY id");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Find a person by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new person, returning the generated ID. Unset fields are stored as NULL.
    pub async fn create(pool: &PgPool, dto: &CreatePerson) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO persons (name, age, address, work) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(dto.age)
        .bind(&dto.address)
        .bind(&dto.work)
        .fetch_one(pool)
        .await
    }

    /// Merge a partial update onto the stored row and write all columns back.
    ///
    /// The row is locked with `FOR UPDATE` between the read and the write so
    /// concurrent merges on the same person serialize. Returns `None` if the
    /// person does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let merged = dto.merge_onto(current);

        let query = format!(
            "UPDATE persons SET \
                 name = $2, \
                 age = $3, \
                 address = $4, \
                 work = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&merged.name)
            .bind(merged.age)
            .bind(&merged.address)
            .bind(&merged.work)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a person by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
