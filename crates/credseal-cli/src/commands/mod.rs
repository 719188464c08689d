pub mod backup;
pub mod misc;
pub mod passwords;
