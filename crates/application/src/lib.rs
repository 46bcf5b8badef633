//! Resolution override use cases: the provider port, the result pipeline and
//! the scope that installs per-call resolver settings.
pub mod pipeline;
pub mod ports;
pub mod scope;
pub mod use_cases;
