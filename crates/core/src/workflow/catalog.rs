//! Menu catalog management.

use std::sync::Arc;

use crate::error::CoreError;
use crate::menu::{prepare_new_item, MenuCategory, MenuItem, NewMenuItem};
use crate::store::Store;
use crate::types::RecordId;

pub struct MenuCatalog {
    store: Arc<dyn Store>,
}

impl MenuCatalog {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn add(&self, input: NewMenuItem) -> Result<MenuItem, CoreError> {
        let input = prepare_new_item(input)?;
        let item = self.store.create_menu_item(input).await?;
        tracing::info!(menu_item_id = %item.id, name = %item.name, "Menu item added");
        Ok(item)
    }

    pub async fn edit(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        let id = item.id;
        let prepared = prepare_new_item(NewMenuItem::from(item))?;
        let item = self.store.update_menu_item(prepared.with_id(id)).await?;
        tracing::info!(menu_item_id = %id, "Menu item updated");
        Ok(item)
    }

    /// Idempotent: removing an unknown id succeeds.
    pub async fn remove(&self, id: RecordId) -> Result<(), CoreError> {
        self.store.delete_menu_item(id).await?;
        tracing::info!(menu_item_id = %id, "Menu item deleted");
        Ok(())
    }

    /// Items in store order, optionally restricted to one category.
    pub async fn list(&self, category: Option<MenuCategory>) -> Result<Vec<MenuItem>, CoreError> {
        let mut items = self.store.list_menu_items().await?;
        if let Some(category) = category {
            items.retain(|item| item.category == category);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::store::MemoryStore;
    use crate::types::new_record_id;

    fn dish(name: &str, price: &str, category: MenuCategory) -> NewMenuItem {
        NewMenuItem {
            name: name.into(),
            description: String::new(),
            price: price.into(),
            image: String::new(),
            category,
            is_vegan: false,
            is_chef_special: false,
        }
    }

    #[tokio::test]
    async fn add_prefixes_currency_symbol() {
        let catalog = MenuCatalog::new(Arc::new(MemoryStore::new()));
        let item = catalog
            .add(dish("Biryani", "9.99", MenuCategory::SouthIndianMain))
            .await
            .unwrap();
        assert_eq!(item.price, "£9.99");
    }

    #[tokio::test]
    async fn repeated_edits_never_double_the_prefix() {
        let catalog = MenuCatalog::new(Arc::new(MemoryStore::new()));
        let mut item = catalog
            .add(dish("Biryani", "9.99", MenuCategory::SouthIndianMain))
            .await
            .unwrap();

        for _ in 0..3 {
            item.price = "£9.99".into();
            item = catalog.edit(item).await.unwrap();
        }
        assert_eq!(item.price, "£9.99");
        assert_eq!(catalog.list(None).await.unwrap()[0].price, "£9.99");
    }

    #[tokio::test]
    async fn edit_unknown_item_is_not_found() {
        let catalog = MenuCatalog::new(Arc::new(MemoryStore::new()));
        let ghost = dish("Ghost", "1", MenuCategory::ChennaiStarter).with_id(new_record_id());
        assert_matches!(catalog.edit(ghost).await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn add_rejects_missing_price() {
        let catalog = MenuCatalog::new(Arc::new(MemoryStore::new()));
        assert_matches!(
            catalog.add(dish("Vada", " ", MenuCategory::ChennaiStarter)).await,
            Err(CoreError::Validation(_))
        );
    }

    #[tokio::test]
    async fn list_filters_by_category() {
        let catalog = MenuCatalog::new(Arc::new(MemoryStore::new()));
        catalog
            .add(dish("Chicken 65", "8.99", MenuCategory::ChennaiStarter))
            .await
            .unwrap();
        catalog
            .add(dish("Dosa", "7.50", MenuCategory::SouthIndianMain))
            .await
            .unwrap();

        let starters = catalog.list(Some(MenuCategory::ChennaiStarter)).await.unwrap();
        assert_eq!(starters.len(), 1);
        assert_eq!(starters[0].name, "Chicken 65");
        assert_eq!(catalog.list(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn remove_twice_is_fine() {
        let catalog = MenuCatalog::new(Arc::new(MemoryStore::new()));
        let item = catalog
            .add(dish("Vada", "3", MenuCategory::ChennaiStarter))
            .await
            .unwrap();
        catalog.remove(item.id).await.unwrap();
        catalog.remove(item.id).await.unwrap();
        assert!(catalog.list(None).await.unwrap().is_empty());
    }
}
