//! # SchoolPro Config
//!
//! Configuration types for the SchoolPro API, loaded from environment
//! variables:
//!
//! - [`server`]: Listen address and port
//! - [`jwt`]: JWT signing secret and token lifetimes
//! - [`cors`]: CORS allow-list
//!
//! # Example
//!
//! ```ignore
//! use schoolpro_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
