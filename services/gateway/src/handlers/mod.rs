pub mod health;
pub mod orders;
pub mod symbols;
pub mod ws;
