pub mod db;
pub mod local;
