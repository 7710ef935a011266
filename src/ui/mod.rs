pub mod components;
pub mod list;
