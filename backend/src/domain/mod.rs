//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed identity entities used by the API and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User (alias to `user::User`): public account view, never carrying
//!   password material.
//! - Registration and LoginCredentials: validated inbound commands.
//! - IdentityService: implementation of the driving ports.

pub mod auth;
pub mod error;
pub mod identity_service;
pub mod ports;
pub mod registration;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identity_service::IdentityService;
pub use self::registration::{Registration, RegistrationValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    Avatar, AvatarImage, EmailAddress, PasswordHash, User, UserCredentials, UserId, UserName,
    UserValidationError,
};
