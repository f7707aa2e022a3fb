//! Layered settings for Folio table views
//!
//! Settings are resolved from several sources merged by priority:
//!
//! 1. Environment variables with the `FOLIO_` prefix (highest)
//! 2. A TOML settings file, at the root or under `[table]`
//! 3. Programmatic defaults (lowest)
//!
//! Keys missing from every source take the values of
//! [`TableSettings::default`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use folio_conf::SettingsBuilder;
//! use folio_conf::sources::{EnvSource, TomlFileSource};
//!
//! let settings = SettingsBuilder::new()
//!     .add_source(TomlFileSource::new("folio.toml"))
//!     .add_source(EnvSource::default())
//!     .build()?;
//! println!("{} rows per page", settings.page_size);
//! # Ok::<(), folio_conf::SettingsError>(())
//! ```

pub mod settings;
pub mod sources;

pub use settings::{SettingsBuilder, SettingsError, TableSettings};
pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};
