pub mod contact;
pub mod organization;
