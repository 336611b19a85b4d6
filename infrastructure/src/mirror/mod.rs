//! Local settings mirror adapters.
//!
//! Provides [`FileSettingsMirror`], which implements the
//! [`SettingsMirrorPort`](hive_application::SettingsMirrorPort) over a single
//! JSON file.

mod file_mirror;

pub use file_mirror::FileSettingsMirror;
