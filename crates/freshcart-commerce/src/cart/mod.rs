//! Shopping cart module.
//!
//! Contains the line item types, the pure cart state transition and the
//! owned store that applies commands to it.

mod item;
mod state;
mod store;

pub use item::{CartItem, LineItem};
pub use state::{CartCommand, CartState};
pub use store::CartStore;
