//! Menu item entity, price normalization, and the default catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::restaurant::CURRENCY_SYMBOL;
use crate::types::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuCategory {
    ChennaiStarter,
    SouthIndianMain,
}

impl MenuCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuCategory::ChennaiStarter => "chennai-starter",
            MenuCategory::SouthIndianMain => "south-indian-main",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chennai-starter" => Ok(MenuCategory::ChennaiStarter),
            "south-indian-main" => Ok(MenuCategory::SouthIndianMain),
            other => Err(CoreError::Validation(format!(
                "Unknown menu category '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub image: String,
    pub category: MenuCategory,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_chef_special: bool,
}

/// A menu item before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub image: String,
    pub category: MenuCategory,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_chef_special: bool,
}

impl NewMenuItem {
    pub fn with_id(self, id: RecordId) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            category: self.category,
            is_vegan: self.is_vegan,
            is_chef_special: self.is_chef_special,
        }
    }
}

impl From<MenuItem> for NewMenuItem {
    fn from(item: MenuItem) -> Self {
        NewMenuItem {
            name: item.name,
            description: item.description,
            price: item.price,
            image: item.image,
            category: item.category,
            is_vegan: item.is_vegan,
            is_chef_special: item.is_chef_special,
        }
    }
}

/// Canonicalize a display price to exactly one leading currency symbol.
///
/// Any number of leading symbols and surrounding whitespace are stripped
/// before the single prefix is re-applied, so the result is a fixed point:
/// `normalize_price(normalize_price(p)) == normalize_price(p)`.
pub fn normalize_price(raw: &str) -> Result<String, CoreError> {
    let mut amount = raw.trim();
    while let Some(rest) = amount.strip_prefix(CURRENCY_SYMBOL) {
        amount = rest.trim_start();
    }
    if amount.is_empty() {
        return Err(CoreError::Validation("price is required".into()));
    }
    Ok(format!("{CURRENCY_SYMBOL}{amount}"))
}

/// Validate the name and normalize the price of an item about to be stored.
pub fn prepare_new_item(mut input: NewMenuItem) -> Result<NewMenuItem, CoreError> {
    input.name = input.name.trim().to_string();
    if input.name.is_empty() {
        return Err(CoreError::Validation("name is required".into()));
    }
    input.price = normalize_price(&input.price)?;
    Ok(input)
}

/// The catalog seeded into stores that start empty.
pub fn default_catalog() -> Vec<NewMenuItem> {
    let item = |name: &str,
                description: &str,
                price: &str,
                category,
                is_vegan,
                is_chef_special,
                image: &str| NewMenuItem {
        name: name.into(),
        description: description.into(),
        price: price.into(),
        image: image.into(),
        category,
        is_vegan,
        is_chef_special,
    };

    vec![
        item(
            "Chicken 65",
            "Deep-fried chicken marinated in ginger, garlic, and fiery curry leaves.",
            "£8.99",
            MenuCategory::ChennaiStarter,
            false,
            false,
            "https://images.unsplash.com/photo-1610057099431-d73a1c9d2f2f?q=80&w=800&auto=format&fit=crop",
        ),
        item(
            "Ghee Lamb Roast",
            "Tender lamb pieces slow-roasted in pure ghee with black pepper and spices.",
            "£10.50",
            MenuCategory::ChennaiStarter,
            false,
            true,
            "https://images.unsplash.com/photo-1606471191009-63994c53433b?q=80&w=800&auto=format&fit=crop",
        ),
        item(
            "Masala Dosa",
            "Crispy large rice crepe stuffed with spiced potato masala, served with sambar.",
            "£7.50",
            MenuCategory::SouthIndianMain,
            true,
            false,
            "https://images.unsplash.com/photo-1589301760014-d929f3979dbc?q=80&w=800&auto=format&fit=crop",
        ),
        item(
            "Chennai Chicken Biryani",
            "Aromatic Seeraga Samba rice cooked traditionally with tender chicken and spices.",
            "£9.99",
            MenuCategory::SouthIndianMain,
            false,
            true,
            "https://images.unsplash.com/photo-1563379091339-03b21ab4a4f8?q=80&w=800&auto=format&fit=crop",
        ),
        item(
            "Chettinad Chicken Curry",
            "A spicy, aromatic curry made with roasted coconuts and a blend of Chettinad spices.",
            "£9.50",
            MenuCategory::SouthIndianMain,
            false,
            false,
            "https://images.unsplash.com/photo-1603894584373-5ac82b2ae398?q=80&w=800&auto=format&fit=crop",
        ),
    ]
}
