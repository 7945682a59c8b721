// Service module exports

pub mod planner;
pub mod settings;
pub mod store;
