pub mod contact;
pub mod home;
pub mod products;
