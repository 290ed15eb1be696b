//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin CLI
//! a single entry point for each operation.
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup, deletion and resolution
//! - [`services::code_allocator::CodeAllocator`] - Custom code validation and random code generation

pub mod services;
