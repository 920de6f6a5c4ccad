pub mod item_card;

pub use item_card::{ItemCard, PLACEHOLDER_IMAGE};
