mod bank;
mod loader;

pub use bank::default_bank;
pub use loader::{LoadError, load_bank_from_json};
