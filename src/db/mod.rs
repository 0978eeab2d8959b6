pub mod connection;
pub mod roster;

pub use connection::Database;
pub use roster::{load_roster, save_roster};
