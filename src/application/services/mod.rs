//! Application services.

mod fetch_dispatcher;

pub use fetch_dispatcher::FetchDispatcher;
