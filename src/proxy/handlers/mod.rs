// API endpoint handlers

pub mod deezer;
pub mod spotify;
