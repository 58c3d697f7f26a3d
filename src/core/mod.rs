pub mod commands;
pub mod config;
pub mod decimal;
pub mod env;
pub mod ident;
pub mod session;
pub mod vars;
