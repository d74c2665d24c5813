//! videogen-service: text-to-video generation proxied to Replicate, plus a
//! static catalog of models, prompt tags and example prompts.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
