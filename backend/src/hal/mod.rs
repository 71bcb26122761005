/// Safe, user-facing traits implemented on [`layouts::Module`].
pub mod api;

/// Blanket implementations connecting [`api`] traits to [`oep`] traits.
pub mod delegates;

/// Backend-agnostic data layouts.
pub mod layouts;

/// Open extension points: `unsafe` traits backend types implement.
pub mod oep;
