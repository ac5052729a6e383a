pub mod config;
pub mod dispatch;
pub mod formats;
pub mod human_size;
pub mod intake;
pub mod session;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, EngineConfig,
    IntakeConfig, ServerConfig,
};
pub use dispatch::{
    output_file_name, ConversionEngine, ConversionRequest, DispatchError, DownloadHandle,
    HttpEngine, Quality,
};
pub use formats::{CanonicalType, FormatProfile, FormatTable, OutputFormat};
pub use intake::{resolve, IntakeError, UploadedFile, DEFAULT_MAX_UPLOAD_BYTES};
pub use session::{AttemptStatus, ConversionAttempt, SessionError, SessionHistory};
