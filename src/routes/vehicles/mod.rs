mod add_vehicle;
mod delete_vehicle;
mod list_vehicles;
mod update_vehicle;

pub use add_vehicle::*;
pub use delete_vehicle::*;
pub use list_vehicles::*;
pub use update_vehicle::*;
