// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup wiring
// - infrastructure: local key-value store and Postgres adapters
// - presentation: HTTP handlers and routing
// - application: ports, use cases and dashboard services
// - domain: core models and form normalization

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
