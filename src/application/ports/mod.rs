// src/application/ports/mod.rs
pub mod object_store;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type ObjectStorePort = dyn object_store::ObjectStore;
