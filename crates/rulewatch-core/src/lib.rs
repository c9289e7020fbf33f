pub mod app_config;
pub mod config;
pub mod dates;
pub mod error;
pub mod normalize;
pub mod qa;
pub mod record;
pub mod table_io;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use dates::DateField;
pub use error::{ConfigError, CoreError};
pub use normalize::normalize;
pub use qa::{basic_qa, render_markdown, write_markdown, QaReport};
pub use record::{join_agency_names, Record, Table, COUNTRY, SOURCE, STANDARD_COLUMNS};
pub use table_io::write_csv;
