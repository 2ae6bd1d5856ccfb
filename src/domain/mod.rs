pub mod error;
pub mod hub;
pub mod options;
pub mod substitution;
pub mod template;

pub use error::AppError;
pub use hub::HubAddress;
pub use options::{
    DEFAULT_OUTPUT_PATH, DEFAULT_TEMPLATE_PATH, GenerateOptions, OutputTarget, STDOUT_OUTPUT,
};
pub use substitution::{
    DOCKER_ID_TOKEN, PREFIX_TOKEN, contains_placeholder, substitute_placeholders,
};
pub use template::{IMAGE_PREFIX_PATH, TemplateDocument};
