// Service module exports

pub mod countdown;
pub mod registration;
pub mod settings;
