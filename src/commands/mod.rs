//! Command implementations for the srcbundle CLI

pub mod bundle;
pub mod helpers;
