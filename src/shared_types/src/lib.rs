//! Generated shell bindings for `display-config-core` are written to
//! `generated/` by this crate's build script.
