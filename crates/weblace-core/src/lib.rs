pub mod config;
pub mod logging;

// Pipeline modules
pub mod html;
pub mod policy;
pub mod resolver;
pub mod resource;
pub mod snippet;
pub mod web_path;
