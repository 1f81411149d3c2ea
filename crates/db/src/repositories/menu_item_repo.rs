//! Repository for the `menu_items` table.

use ahlam_core::menu::{MenuItem, NewMenuItem};
use ahlam_core::types::RecordId;
use sqlx::PgPool;

use crate::models::menu_item::MenuItemRow;

/// Column list for `menu_items` queries.
const COLUMNS: &str = "id, name, description, price, image, category, is_vegan, is_chef_special";

pub struct MenuItemRepo;

impl MenuItemRepo {
    pub async fn create(
        pool: &PgPool,
        id: RecordId,
        input: &NewMenuItem,
    ) -> Result<MenuItemRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu_items \
                (id, name, description, price, image, category, is_vegan, is_chef_special) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItemRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.price)
            .bind(&input.image)
            .bind(input.category.as_str())
            .bind(input.is_vegan)
            .bind(input.is_chef_special)
            .fetch_one(pool)
            .await
    }

    /// List all items in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MenuItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_items ORDER BY seq");
        sqlx::query_as::<_, MenuItemRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every editable column. Returns `None` if the id is unknown.
    pub async fn update(pool: &PgPool, item: &MenuItem) -> Result<Option<MenuItemRow>, sqlx::Error> {
        let query = format!(
            "UPDATE menu_items SET \
                name = $2, description = $3, price = $4, image = $5, \
                category = $6, is_vegan = $7, is_chef_special = $8 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItemRow>(&query)
            .bind(item.id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(&item.price)
            .bind(&item.image)
            .bind(item.category.as_str())
            .bind(item.is_vegan)
            .bind(item.is_chef_special)
            .fetch_optional(pool)
            .await
    }

    /// Delete by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
