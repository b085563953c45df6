//src/hero/src/bag/mod.rs
mod inventory;

pub use inventory::Inventory;
