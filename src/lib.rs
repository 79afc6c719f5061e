pub mod feed;
pub mod repository;
pub mod shared;
pub mod sim;
