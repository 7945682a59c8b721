// Shared helpers

pub mod date;
