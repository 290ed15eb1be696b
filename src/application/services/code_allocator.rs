//! Short code allocation.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{RESERVED_CODES, generate_code, validate_custom_code};

/// Default number of random draws before a generated code is given up on.
pub const DEFAULT_GENERATION_ATTEMPTS: usize = 1;

/// Produces codes that do not currently exist in the store.
///
/// The existence check is a read. It does not reserve the code: the store's
/// uniqueness constraint on insert remains the authoritative conflict signal.
pub struct CodeAllocator<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    max_attempts: usize,
}

impl<L: LinkRepository + ?Sized> CodeAllocator<L> {
    /// Creates an allocator that draws at most `max_attempts` random codes.
    ///
    /// `max_attempts` is clamped to at least 1.
    pub fn new(link_repository: Arc<L>, max_attempts: usize) -> Self {
        Self {
            link_repository,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Returns a code that is free at the time of the check.
    ///
    /// - With a candidate: validates its format, then checks it is unused.
    /// - Without: draws random 6-character codes until one is unused or the
    ///   attempt budget runs out. With the default budget of 1, a collision is
    ///   reported to the caller instead of retried.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the candidate is malformed or reserved
    /// - [`AppError::Conflict`] if the candidate is taken, or every generated
    ///   code collided
    /// - [`AppError::Storage`] on backend errors
    pub async fn allocate(&self, candidate: Option<&str>) -> Result<String, AppError> {
        match candidate {
            Some(code) => self.claim_candidate(code).await,
            None => self.generate_unique_code().await,
        }
    }

    async fn claim_candidate(&self, code: &str) -> Result<String, AppError> {
        validate_custom_code(code)?;

        if self.link_repository.find_by_code(code).await?.is_some() {
            return Err(AppError::conflict(
                "Code already exists",
                json!({ "code": code }),
            ));
        }

        Ok(code.to_string())
    }

    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code();
            if RESERVED_CODES.contains(&code.as_str()) {
                continue;
            }

            if self.link_repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }

            debug!(code = %code, attempt, "Generated code collided with an existing link");
        }

        Err(AppError::conflict(
            "Generated code collided with an existing link, try again",
            json!({ "attempts": self.max_attempts }),
        ))
    }
}
