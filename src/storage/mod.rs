pub mod db;
pub mod inmemory;
