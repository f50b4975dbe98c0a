//! # API crate — REST client boundary for the Project Information System
//!
//! This crate is everything the views know about the department's HTTP API.
//! It owns the endpoint surface, the canonical data model, and the error
//! taxonomy, so the screens above it never touch raw JSON or raw status
//! codes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per server endpoint over a shared `reqwest::Client` |
//! | [`models`] | Canonical entities and request payloads. Server key-casing variants are normalized here, once, via serde aliases |
//! | [`error`] | [`ApiError`]: transport failure, non-success status with server message, unexpected shape |
//! | [`fanout`] | Bounded-concurrency helper for per-record join-set fetches |
//!
//! The server is the sole source of truth: primary keys are never computed
//! client-side, and join-set updates always send the full desired id set
//! (replace semantics, not a diff).

pub mod client;
pub mod error;
pub mod fanout;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    format_budget, parse_count, Ack, AuthResponse, Department, Faculty, FacultyRef,
    FacultyTechnology, LoginRequest, NewFaculty, NewProject, NewStudent, Project, ProjectFaculty,
    ProjectStatus, ProjectStudent, ProjectTechnology, ProjectTheme, ProjectUpdate, Role,
    SendOtpRequest, SignupRequest, Student, StudentRef, StudentTechnology, Technology, Theme, User,
    VerifyOtpRequest,
};
