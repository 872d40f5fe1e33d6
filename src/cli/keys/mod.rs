//! Authorized key commands.
//!
//! Add, list, and remove SSH public keys.

mod add;
mod list;
mod rm;

pub use add::execute as add;
pub use list::execute as list;
pub use rm::execute as rm;
