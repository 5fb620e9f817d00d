//! Application layer with use cases and services.

/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::FetchDispatcher;
pub use use_cases::{
    ConfirmError, ConfirmSelectionUseCase, LoadLocalitiesUseCase, LoadRegionsUseCase,
};
