pub mod options;
pub mod store;

pub use options::{FontMode, OPTION_FONT_NAME, OPTION_FONT_OPTIONS, OPTION_SPOTIFY_PATH};
pub use store::ExportConfig;
