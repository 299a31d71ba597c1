//! Point-of-sale item list
//!
//! Items are entered through a two-field form and kept in memory in the
//! order they were added, with a running total in Indian rupees.

pub mod cart;
pub mod money;

pub use cart::{
    AddItemError, CartEvent, CartState, CartView, Item, ItemRow, accepts_price_keystroke, reduce,
};
pub use money::{Money, ParseMoneyError};
