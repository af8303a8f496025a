//! Entity Models
//!
//! One file per table. Each file carries the entity itself plus its
//! create/update payloads. All persisted entities share the core record
//! shape: snowflake `id`, `created_at`/`updated_at` epoch milliseconds.

pub mod category;
pub mod dish;
pub mod restaurant;
pub mod user;

pub use category::Category;
pub use dish::{Dish, DishCreate, DishOption, DishOptionChoice, DishUpdate};
pub use restaurant::{Restaurant, RestaurantCreate, RestaurantUpdate};
pub use user::{User, UserCreate, UserRole};
