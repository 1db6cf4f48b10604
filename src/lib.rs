//! Stencil is a project-scaffolding tool: given a named template (a
//! directory tree containing placeholder tokens), it produces a new
//! project directory with the tokens substituted in path names and file
//! contents, optionally adds a license file, runs post-creation hooks
//! and initializes a version-control repository.

/// Built-in example project types and binary discovery
pub mod builtin;

/// Command-line interface module for the stencil application
pub mod cli;

/// Configuration handling
/// Supports JSON and YAML formats (stencil.json, stencil.yml, stencil.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the stencil application
pub mod error;

/// Post-creation hooks and version-control initialization
pub mod hooks;

/// License file instantiation
pub mod license;

/// Logger initialization
pub mod logger;

/// Core template instantiation orchestration
/// Stages, substitutes and publishes the template tree
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Project type registry
pub mod registry;

/// Replacement resolution: declarative producers to concrete values
pub mod resolver;

/// Case-preserving token substitution
pub mod substitute;

/// Template name to source directory resolution
pub mod template;

/// Scratch workspace lifecycle
pub mod workspace;
