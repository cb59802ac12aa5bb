//! Guarded dashboard pages. All of them render inside `DashboardLayout`.

pub mod add_plant;
pub mod layout;
pub mod my_plants;
pub mod overview;
pub mod plant_details;
pub mod update_plant;
pub mod user_profile;
