//! API Module
//!
//! HTTP handlers and routing for the user REST API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /` - Welcome message with environment and backend status
//! - `POST /users` - Create a user
//! - `GET /users/:id` - Retrieve a user
//! - `PUT /users/:id` - Update a user (partial)
//! - `DELETE /users/:id` - Delete a user

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
