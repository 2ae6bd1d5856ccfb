//! Options for a single config generation run.

use std::path::{Path, PathBuf};

use super::{AppError, HubAddress};

/// Template read when `--template` is not given.
pub const DEFAULT_TEMPLATE_PATH: &str = "config-template.yaml";
/// Output written when no output file is given.
pub const DEFAULT_OUTPUT_PATH: &str = "config.yaml";
/// Output value that renders to stdout instead of a file.
pub const STDOUT_OUTPUT: &str = "-";

/// Where the generated document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn from_arg(value: &str) -> Self {
        if value == STDOUT_OUTPUT {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }
}

/// Immutable inputs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    docker_id: String,
    prefix: String,
    docker_org: Option<String>,
    hub_address: Option<HubAddress>,
    template_path: PathBuf,
    output: OutputTarget,
    force: bool,
}

impl GenerateOptions {
    /// Build options with the default template and output locations.
    pub fn new(docker_id: impl Into<String>, prefix: impl Into<String>) -> Result<Self, AppError> {
        let docker_id = docker_id.into();
        let prefix = prefix.into();

        if docker_id.trim().is_empty() {
            return Err(AppError::usage("Docker ID must not be empty"));
        }
        if prefix.trim().is_empty() {
            return Err(AppError::usage("Image prefix must not be empty"));
        }

        Ok(Self {
            docker_id,
            prefix,
            docker_org: None,
            hub_address: None,
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output: OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_PATH)),
            force: false,
        })
    }

    pub fn with_docker_org(mut self, docker_org: impl Into<String>) -> Result<Self, AppError> {
        let docker_org = docker_org.into();
        if docker_org.trim().is_empty() {
            return Err(AppError::usage("Docker organisation must not be empty"));
        }
        self.docker_org = Some(docker_org);
        Ok(self)
    }

    pub fn with_hub_address(mut self, hub_address: HubAddress) -> Self {
        self.hub_address = Some(hub_address);
        self
    }

    pub fn with_template_path(mut self, template_path: impl Into<PathBuf>) -> Self {
        self.template_path = template_path.into();
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn docker_id(&self) -> &str {
        &self.docker_id
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn docker_org(&self) -> Option<&str> {
        self.docker_org.as_deref()
    }

    pub fn hub_address(&self) -> Option<&HubAddress> {
        self.hub_address.as_ref()
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    pub fn force(&self) -> bool {
        self.force
    }

    /// Value substituted for `<docker-id>`: the organisation when given, else the login.
    pub fn resolved_docker_id(&self) -> &str {
        self.docker_org.as_deref().unwrap_or(&self.docker_id)
    }
}
