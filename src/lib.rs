pub mod feed;
pub mod listing;
pub mod server;
pub mod source;

#[cfg(test)]
mod testutil;
