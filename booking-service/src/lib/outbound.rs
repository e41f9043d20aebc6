pub mod clients;
pub mod repositories;
