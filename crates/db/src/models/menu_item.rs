//! Row model for the `menu_items` table.

use ahlam_core::error::CoreError;
use ahlam_core::menu::MenuItem;
use ahlam_core::types::RecordId;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct MenuItemRow {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub is_vegan: bool,
    pub is_chef_special: bool,
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = CoreError;

    fn try_from(row: MenuItemRow) -> Result<Self, Self::Error> {
        let category = row.category.parse().map_err(|_| {
            CoreError::Internal(format!(
                "menu item {} has unknown category '{}'",
                row.id, row.category
            ))
        })?;
        Ok(MenuItem {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
            category,
            is_vegan: row.is_vegan,
            is_chef_special: row.is_chef_special,
        })
    }
}
