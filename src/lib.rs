pub mod catalog;
pub mod command;
pub mod error;
pub mod export;
pub mod io;
pub mod models;
pub mod placeholder;
pub mod tag_store;
pub mod ui;

// Re-export commonly used items
pub use catalog::CardCatalog;
pub use command::{command_for_tag, format_tag_command};
pub use error::{TaggerError, TaggerResult};
pub use export::{export_json, export_tags, import_json, import_tags, TagExport};
pub use io::read_cards_csv;
pub use models::{CardRecord, StandardTag, WorkerTraits};
pub use placeholder::{placeholder_set, PlaceholderArt};
pub use tag_store::{CardTag, TagKind, TagStore, TagSummary};
