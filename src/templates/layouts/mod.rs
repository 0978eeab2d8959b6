pub mod email;

pub use email::email_layout;
