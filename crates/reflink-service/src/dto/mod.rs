//! Data transfer objects for service inputs and outputs
//!
//! This module provides:
//! - Request DTOs with validation
//! - Response DTOs for serializing outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AddCategoryRequest, SubmitLinkRequest, UpdateCategoryRequest, WebAppAddCategory,
    WebAppPayload, WebAppSubmitLink, WebAppUser,
};

// Re-export commonly used response types
pub use responses::{
    CategoryResponse, CategorySummaryResponse, HealthChecks, HealthResponse, IndexResponse,
    LinkResponse, ModerationResponse, PendingLinkResponse, ReactionCountsResponse,
    ReadinessResponse, StatsResponse, TopLinkResponse, WebAppResponse,
};
