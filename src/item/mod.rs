//! Food item domain: the stored entity, its category set, input validation
//! and id generation.

mod category;
mod error;
mod food_item;
mod id;

pub use category::Category;
pub use error::ItemError;
pub use food_item::{parse_expiry_input, FoodItem, NewFoodItem, EXPIRY_DATE_FORMAT};
pub use id::next_item_id;
