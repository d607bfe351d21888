pub mod credential;
pub mod posting;
pub mod resume;
