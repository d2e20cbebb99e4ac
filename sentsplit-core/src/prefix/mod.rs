//! Non-breaking prefix tables and their loading

pub mod format;
pub mod loader;
pub mod table;

pub use loader::{available_languages, load_prefix_table, LanguageInfo, PrefixSource};
pub use table::{BreakClass, PrefixTable};
