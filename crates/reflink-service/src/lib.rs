//! # reflink-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CatalogService, EngagementService, ModerationService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, StatsService, UserService, WebAppService,
};
