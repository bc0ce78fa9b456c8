//! # Command Layer
//!
//! Prompt commands over the state types. Each command is a plain function
//! that declares exactly the state it touches and returns a serializable
//! snapshot for the shell to render.

pub mod catalog;
pub mod configure;
pub mod stash;
