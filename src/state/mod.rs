mod manager;
mod persistence;

pub use manager::ProfileBook;
pub use persistence::{load_profiles, save_profiles};
