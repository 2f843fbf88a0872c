/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Match creation, scoring and renaming.
pub mod match_service;
