//! HTTP controller endpoints for the Slugger web API.
//!
//! Controllers extract path, query and body parameters, delegate to the services and return
//! JSON responses. Every handler is annotated for the OpenAPI document served by the router.

pub mod health;
pub mod player;
