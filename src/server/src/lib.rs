/* src/server/src/lib.rs */

pub mod config;
pub mod email;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod render;
