//! Business logic services for the application layer.

pub mod code_allocator;
pub mod link_service;

pub use code_allocator::{CodeAllocator, DEFAULT_GENERATION_ATTEMPTS};
pub use link_service::LinkService;
