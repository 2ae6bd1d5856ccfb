//! Generate command: template in, substituted BinderHub config out.

use std::io;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    AppError, GenerateOptions, OutputTarget, TemplateDocument, substitute_placeholders,
};
use crate::ports::{DocumentStore, WriteMode};

/// Result of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// File written, or `None` when rendered to stdout.
    pub output: Option<PathBuf>,
    /// Final `config.BinderHub.image_prefix`.
    pub image_prefix: String,
    /// `hub.url` injected by this run.
    pub hub_url: Option<String>,
    /// Whether an existing output file was replaced.
    pub replaced_existing: bool,
    /// Rendered YAML document.
    pub rendered: String,
}

/// Execute the generate command.
///
/// The overwrite guard runs before the template is read; a refused run never
/// touches the existing output.
pub fn execute<S: DocumentStore>(
    ctx: &AppContext<S>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let store = ctx.store();

    let replaced_existing = match options.output() {
        OutputTarget::File(path) => {
            let exists = store.exists(path);
            if exists && !options.force() {
                return Err(AppError::OutputExists { path: path.display().to_string() });
            }
            exists
        }
        OutputTarget::Stdout => false,
    };

    let mut document = load_template(store, options)?;

    let docker_id = options.resolved_docker_id();
    tracing::debug!(docker_id, prefix = options.prefix(), "Resolved image prefix values");
    let image_prefix =
        substitute_placeholders(document.image_prefix()?, docker_id, options.prefix());
    document.set_image_prefix(image_prefix.clone())?;

    let hub_url = options.hub_address().map(|address| {
        tracing::debug!(hub = %address, "Injecting hub section");
        address.url()
    });
    if let Some(url) = &hub_url {
        if document.hub_url().is_some() {
            tracing::debug!("Replacing existing hub section from template");
        }
        document.set_hub_url(url.clone());
    }

    let rendered = document.to_yaml().map_err(|err| {
        AppError::write_error(
            output_label(options.output()),
            io::Error::new(io::ErrorKind::InvalidData, err),
        )
    })?;

    let output = match options.output() {
        OutputTarget::File(path) => {
            let mode = if options.force() { WriteMode::Replace } else { WriteMode::CreateNew };
            if replaced_existing {
                tracing::warn!(path = %path.display(), "Overwriting existing output file");
            }
            store.write(path, &rendered, mode)?;
            tracing::info!(path = %path.display(), "Wrote BinderHub config");
            Some(path.clone())
        }
        OutputTarget::Stdout => None,
    };

    Ok(GenerateOutcome { output, image_prefix, hub_url, replaced_existing, rendered })
}

fn load_template<S: DocumentStore>(
    store: &S,
    options: &GenerateOptions,
) -> Result<TemplateDocument, AppError> {
    let path = options.template_path();
    let label = path.display().to_string();
    tracing::debug!(template = %label, "Loading template");

    let text = store
        .read_to_string(path)
        .map_err(|err| AppError::TemplateLoad { path: label.clone(), details: err.to_string() })?;
    TemplateDocument::parse(label, &text)
}

fn output_label(output: &OutputTarget) -> String {
    match output {
        OutputTarget::File(path) => path.display().to_string(),
        OutputTarget::Stdout => "<stdout>".to_string(),
    }
}
