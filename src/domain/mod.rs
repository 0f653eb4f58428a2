mod data_stores;
mod email;
mod error;
mod password;
mod user;
mod vehicle;

pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use password::*;
pub use user::*;
pub use vehicle::*;
