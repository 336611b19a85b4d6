//! Settings key registry
//!
//! Metadata for every settings key, plus parsing of textual `key = value`
//! assignments into [`SettingsPatch`](crate::SettingsPatch)es. Used by the
//! runtime accessor port and the CLI `get` / `set` commands.

mod config_key;

pub use config_key::{ConfigKeyInfo, UpdateKind, known_keys, lookup_key, parse_assignment, read_key};
