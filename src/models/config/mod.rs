pub mod check_config;
pub mod instance;

pub use check_config::{
    resolve_lighthouse_path, CheckConfig, InitConfig, DEFAULT_LIGHTHOUSE_PATH,
    LIGHTHOUSE_PATH_ENV,
};
pub use instance::{InstanceConfig, RawInstance, MALFORMED_TAGS_WARNING};
