//! Item list with a running total

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

use crate::money::Money;

pub const EMPTY_LIST_MESSAGE: &str = "No items added yet";

/// Why an item was not added, worded for display
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddItemError {
    #[error("Please enter item name")]
    MissingName,

    #[error("Please enter price")]
    MissingPrice,

    #[error("Please enter a valid price")]
    InvalidPrice,

    #[error("Price must be greater than 0")]
    NonPositivePrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: String,
    pub price: Money,
}

impl Item {
    /// Validate raw form input, checking name, then price presence, then
    /// price format, then sign
    pub fn from_input(name: &str, price: &str) -> Result<Self, AddItemError> {
        if name.trim().is_empty() {
            return Err(AddItemError::MissingName);
        }
        if price.trim().is_empty() {
            return Err(AddItemError::MissingPrice);
        }

        let price = Money::parse(price).map_err(|_| AddItemError::InvalidPrice)?;
        if !price.is_positive() {
            return Err(AddItemError::NonPositivePrice);
        }

        Ok(Item {
            name: name.to_string(),
            price,
        })
    }
}

/// Whether the price field should accept `text` as its new content.
///
/// Only digits with at most one decimal point get through.
pub fn accepts_price_keystroke(text: &str) -> bool {
    static PRICE_INPUT_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PRICE_INPUT_REGEX
        .get_or_init(|| Regex::new(r"^\d*\.?\d*$").expect("Failed to compile price input regex"));

    regex.is_match(text)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    pub items: Vec<Item>,
    pub name_input: String,
    pub price_input: String,
    pub error: Option<AddItemError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    NameChanged(String),
    PriceChanged(String),
    AddRequested,
}

impl CartState {
    /// Exact sum of the item prices. [`reduce`] never admits an item whose
    /// price would overflow it.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Item from the current inputs, provided the total can still hold it
    fn admit(&self) -> Result<Item, AddItemError> {
        let item = Item::from_input(&self.name_input, &self.price_input)?;
        self.total()
            .checked_add(item.price)
            .ok_or(AddItemError::InvalidPrice)?;
        Ok(item)
    }

    pub fn view(&self) -> CartView {
        CartView {
            rows: self
                .items
                .iter()
                .map(|item| ItemRow {
                    name: item.name.clone(),
                    price: item.price.to_string(),
                })
                .collect(),
            total: self.total().to_string(),
            placeholder: self.items.is_empty().then_some(EMPTY_LIST_MESSAGE),
            error: self.error.map(|e| e.to_string()),
        }
    }
}

pub fn reduce(state: CartState, event: CartEvent) -> CartState {
    match event {
        CartEvent::NameChanged(name_input) => CartState {
            name_input,
            error: None,
            ..state
        },
        CartEvent::PriceChanged(price_input) if accepts_price_keystroke(&price_input) => {
            CartState {
                price_input,
                error: None,
                ..state
            }
        }
        CartEvent::PriceChanged(_) => state,
        CartEvent::AddRequested => match state.admit() {
            Ok(item) => {
                debug!("Adding item {} at {}", item.name, item.price);
                let mut items = state.items;
                items.push(item);
                CartState {
                    items,
                    ..CartState::default()
                }
            }
            Err(error) => CartState {
                error: Some(error),
                ..state
            },
        },
    }
}

/// Display-ready rendering of the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub rows: Vec<ItemRow>,
    pub total: String,
    pub placeholder: Option<&'static str>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub name: String,
    pub price: String,
}
