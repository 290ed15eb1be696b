//! Link creation, lookup, removal and resolution.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::application::services::code_allocator::CodeAllocator;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_valid_code;
use crate::utils::url_validator::validate_target;

/// Service for creating, reading, deleting and resolving short links.
///
/// Holds an explicitly constructed store handle; there is no global pool.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    allocator: CodeAllocator<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `generation_attempts` bounds the random draws for codes the caller did
    /// not supply. See [`CodeAllocator::new`].
    pub fn new(link_repository: Arc<L>, generation_attempts: usize) -> Self {
        let allocator = CodeAllocator::new(link_repository.clone(), generation_attempts);

        Self {
            link_repository,
            allocator,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target` - Absolute `http`/`https` URL, stored exactly as given
    /// - `custom_code` - Optional code matching `[A-Za-z0-9]{6,8}`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the target or custom code is invalid.
    ///
    /// Returns [`AppError::Conflict`] if the code is taken, including when a
    /// concurrent request inserted it between the existence check and the write.
    pub async fn create_link(
        &self,
        target: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target(&target).map_err(|e| {
            AppError::bad_request("Invalid target URL", json!({ "reason": e.to_string() }))
        })?;

        let code = self.allocator.allocate(custom_code.as_deref()).await?;

        let link = self
            .link_repository
            .create(NewLink {
                code: code.clone(),
                target,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => {
                    AppError::conflict("Code already exists", json!({ "code": code }))
                }
                other => other,
            })?;

        info!(code = %link.code, target = %link.target, "Link created");
        Ok(link)
    }

    /// Retrieves a link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) {
            return Err(not_found(code));
        }

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Deletes a link and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn delete_link(&self, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) {
            return Err(not_found(code));
        }

        let link = self
            .link_repository
            .delete(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        info!(code, "Link deleted");
        Ok(link)
    }

    /// Resolves a code to its link and records one click.
    ///
    /// The click is counted before the caller redirects, so a failure errs
    /// toward undercounting. A failed increment is logged and does not block
    /// the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code. Lookup failures
    /// propagate as [`AppError::Storage`].
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let link = self.get_link(code).await?;

        match self.link_repository.increment_click(code).await {
            Ok(Some(counters)) => {
                debug!(code, clicks = counters.clicks, "Click recorded");
            }
            Ok(None) => {
                warn!(code, "Link removed before click was recorded");
            }
            Err(e) => {
                error!(code, error = %e, "Failed to record click");
            }
        }

        Ok(link)
    }

    /// Checks that the backing store is reachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
