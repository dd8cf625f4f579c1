//! MediAssist web front end.
//!
//! One page with three tabs (health chat, medicine reminders, clinic search),
//! each backed by a JSON endpoint that makes a single external call.

pub mod config;
pub mod error;
pub mod extract;
pub mod integrations;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;

pub use router::build_router;
