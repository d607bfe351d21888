//! Persistence seams. Each store is an `async_trait` object carried in
//! `AppState` behind `Arc<dyn _>`, so the Postgres implementations here can
//! be swapped for the in-memory fakes in `memory` during tests.

pub mod credentials;
pub mod postings;
pub mod resumes;

#[cfg(test)]
pub mod memory;
