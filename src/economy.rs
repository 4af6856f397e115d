//! Shop catalog and coin balance.
//!
//! Two cosmetic categories (player skins, ammo colours), each holding exactly
//! one equipped item.  The equipped index is cached so lookups never scan.

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Skin,
    AmmoColour,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Skin, Category::AmmoColour];

    pub fn label(self) -> &'static str {
        match self {
            Category::Skin => "skins",
            Category::AmmoColour => "ammo colours",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmeticItem {
    pub name: String,
    pub image_path: String,
    /// Beam colour; only ammo colours carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 3]>,
    pub equipped: bool,
    pub purchased: bool,
    pub price: u32,
}

impl CosmeticItem {
    fn new(name: &str, image_path: &str, price: u32) -> Self {
        let default = price == 0;
        Self {
            name: name.to_string(),
            image_path: image_path.to_string(),
            color: None,
            equipped: default,
            purchased: default,
            price,
        }
    }

    fn with_color(self, color: [u8; 3]) -> Self {
        Self { color: Some(color), ..self }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{} catalog is empty", .0.label())]
    Empty(Category),
    #[error("{} catalog has {count} equipped items, expected exactly one", .category.label())]
    EquippedCount { category: Category, count: usize },
}

/// One cosmetic category.  Invariant: exactly one item has `equipped == true`
/// and `equipped` holds its index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CosmeticItem>,
    equipped: usize,
}

impl Catalog {
    pub fn new(category: Category, items: Vec<CosmeticItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty(category));
        }
        let equipped: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.equipped)
            .map(|(i, _)| i)
            .collect();
        match equipped.as_slice() {
            [index] => Ok(Self { items, equipped: *index }),
            _ => Err(CatalogError::EquippedCount {
                category,
                count: equipped.len(),
            }),
        }
    }

    pub fn items(&self) -> &[CosmeticItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CosmeticItem> {
        self.items
    }

    pub fn equipped_index(&self) -> usize {
        self.equipped
    }

    pub fn equipped(&self) -> &CosmeticItem {
        &self.items[self.equipped]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move the equipped flag to `index`; the previous holder is cleared in
    /// the same step.
    fn equip(&mut self, index: usize) {
        self.items[self.equipped].equipped = false;
        self.items[index].equipped = true;
        self.equipped = index;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { price: u32 },
    Equipped,
    AlreadyEquipped,
    InsufficientFunds { price: u32, balance: u32 },
    NoSuchItem,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Economy {
    pub skins: Catalog,
    pub ammo_colours: Catalog,
    pub balance: u32,
}

impl Economy {
    pub fn new(skins: Catalog, ammo_colours: Catalog, balance: u32) -> Self {
        Self {
            skins,
            ammo_colours,
            balance,
        }
    }

    pub fn catalog(&self, category: Category) -> &Catalog {
        match category {
            Category::Skin => &self.skins,
            Category::AmmoColour => &self.ammo_colours,
        }
    }

    fn catalog_mut(&mut self, category: Category) -> &mut Catalog {
        match category {
            Category::Skin => &mut self.skins,
            Category::AmmoColour => &mut self.ammo_colours,
        }
    }

    /// Buy the item if it is not owned yet (without equipping it), or equip
    /// it if it is.  Buying needs `balance >= price`; otherwise nothing moves.
    pub fn purchase_or_equip(&mut self, category: Category, index: usize) -> PurchaseOutcome {
        let balance = self.balance;
        let catalog = self.catalog_mut(category);
        let Some(item) = catalog.items.get(index) else {
            return PurchaseOutcome::NoSuchItem;
        };

        let outcome = if item.purchased {
            if catalog.equipped == index {
                PurchaseOutcome::AlreadyEquipped
            } else {
                catalog.equip(index);
                PurchaseOutcome::Equipped
            }
        } else if balance >= item.price {
            let price = item.price;
            catalog.items[index].purchased = true;
            self.balance -= price;
            PurchaseOutcome::Purchased { price }
        } else {
            PurchaseOutcome::InsufficientFunds {
                price: item.price,
                balance,
            }
        };

        info!("shop {} #{index}: {outcome:?}", category.label());
        outcome
    }

    /// Add coins earned during a run to the balance.  The caller zeroes its
    /// own pending counter; nothing here prevents a double transfer.
    pub fn settle_pending_coins(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }
}

impl Default for Economy {
    /// The catalog a first run starts with.
    fn default() -> Self {
        let skins = vec![
            CosmeticItem::new("Nymphia", "images/Raccoon_1.png", 0),
            CosmeticItem::new("Bianca", "images/Raccoon_2.png", 50),
            CosmeticItem::new("Dawn", "images/Raccoon_3.png", 100),
            CosmeticItem::new("Amanda", "images/Raccoon_4.png", 150),
            CosmeticItem::new("Willow", "images/Raccoon_5.png", 200),
            CosmeticItem::new("Trixie", "images/Raccoon_6.png", 250),
        ];
        let ammo_colours = vec![
            CosmeticItem::new("Pink", "images/Ammo_1.png", 0).with_color([222, 57, 232]),
            CosmeticItem::new("Red", "images/Ammo_2.png", 25).with_color([241, 36, 14]),
            CosmeticItem::new("Blue", "images/Ammo_3.png", 50).with_color([24, 203, 231]),
            CosmeticItem::new("Orange", "images/Ammo_4.png", 75).with_color([255, 127, 0]),
            CosmeticItem::new("Yellow", "images/Ammo_5.png", 100).with_color([227, 243, 19]),
            CosmeticItem::new("Green", "images/Ammo_6.png", 125).with_color([20, 235, 86]),
        ];
        Self {
            skins: Catalog {
                items: skins,
                equipped: 0,
            },
            ammo_colours: Catalog {
                items: ammo_colours,
                equipped: 0,
            },
            balance: 0,
        }
    }
}
