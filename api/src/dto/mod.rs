//! Data transfer objects for the HTTP layer.
//!
//! Error and wrapper bodies come from `id_shared::types::response`; only
//! the account-specific shapes live here.

pub mod account_dto;

pub use account_dto::{
    AuthResponseDto, ChangePasswordRequest, LoginRequest, RegistrationRequest, UserDto,
};
