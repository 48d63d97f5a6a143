pub mod artifacts;
pub mod config;
pub mod consts;
pub mod core_types;
pub mod corpus;
pub mod error;
pub mod optimizer;
pub mod wordset;
// cmd and reports are modules of the binary crate (main.rs).
