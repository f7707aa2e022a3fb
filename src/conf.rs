//! Settings module.
//!
//! Layered table-view settings from defaults, a TOML file and the environment.
//!
//! # Examples
//!
//! ```rust,no_run
//! use folio::conf::{EnvSource, SettingsBuilder, TomlFileSource};
//!
//! // FOLIO_PAGE_SIZE=25 overrides `page_size` from folio.toml
//! let settings = SettingsBuilder::new()
//!     .add_source(TomlFileSource::new("folio.toml"))
//!     .add_source(EnvSource::default())
//!     .build()?;
//!
//! println!("{} rows per page, searching {}", settings.page_size, settings.search_field);
//! # Ok::<(), folio::conf::SettingsError>(())
//! ```

#[cfg(feature = "conf")]
pub use folio_conf::*;
