//! Use case implementations.

mod confirm_selection_use_case;
mod load_localities_use_case;
mod load_regions_use_case;

pub use confirm_selection_use_case::{ConfirmError, ConfirmSelectionUseCase};
pub use load_localities_use_case::LoadLocalitiesUseCase;
pub use load_regions_use_case::LoadRegionsUseCase;
