// SPDX-License-Identifier: MIT OR ISC

mod types;
mod error;
pub mod introspector;
pub mod logging_introspector;
pub mod messages;
pub mod store;
pub mod tally;
pub mod draw;

pub use types::{normalize, is_blank, NameList, Eviction, Winners, SaveMode, StoreConfig};
pub use error::{ResourceIoError, DrawError};
pub use introspector::Introspector;
pub use messages::Locale;
pub use store::{NameStore, evict_random};
pub use tally::{Tally, report};
pub use draw::{Draw, Outcome, seeded_rng, os_rng};

/// The file used when none is given on the command line or in the environment.
pub const DEFAULT_NAMES_FILE: &str = "names.txt";
