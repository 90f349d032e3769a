//! CLI command handlers, one per file.

mod aliases;
mod cart;
mod redirect;

pub use aliases::run_aliases;
pub use cart::run_cart;
pub use redirect::run_redirect;
