//! Entity <-> Model mappers
//!
//! Rows are converted into domain entities with `From` impls. Stored strings
//! that fail to parse fall back to the most restrictive value instead of
//! failing the whole read.

mod category;
mod engagement;
mod link;
mod stats;
mod user;

pub use link::parse_link_status;
