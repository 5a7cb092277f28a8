pub mod bce;

pub use bce::{calculate_cost, BceLoss};
