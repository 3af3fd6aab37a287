pub mod account;
pub mod homepage;
pub mod listings;
