pub mod config;
pub mod conversion;
pub mod error;
pub mod kind;
pub mod layout;
pub mod naming;
pub mod stub;

pub use config::{Configuration, EditorSettings, parse_config_content};
pub use conversion::{ConversionError, ConversionResult, PathComponents, PathResolver};
pub use error::AppError;
pub use kind::TargetKind;
pub use layout::{AppIdentity, ProjectLayout};
pub use naming::{module_name_to_path, path_to_module_name, to_camel_case, to_pascal_case, to_snake_case};
pub use stub::{StubOptions, TemplateSynthesizer};
