//! CLI Adapter.

mod logging;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::{
    AppError, DEFAULT_OUTPUT_PATH, DEFAULT_TEMPLATE_PATH, GenerateOptions, HubAddress,
    OutputTarget,
};

#[derive(Parser, Debug)]
#[command(name = "binder-config")]
#[command(version)]
#[command(
    about = "Write a BinderHub config.yaml using Docker Hub as the image registry",
    long_about = None
)]
struct Cli {
    /// Docker Hub login ID
    #[arg(short = 'i', long = "docker-id", visible_alias = "id", env = "BINDER_DOCKER_ID")]
    docker_id: String,
    /// Prefix prepended to Docker image names
    #[arg(long, env = "BINDER_IMAGE_PREFIX")]
    prefix: String,
    /// Docker Hub organisation; the Docker ID must be a member of it
    #[arg(short = 'o', long = "docker-org", visible_alias = "org", env = "BINDER_DOCKER_ORG")]
    docker_org: Option<String>,
    /// Address of the deployed JupyterHub (host[:port], no scheme)
    #[arg(
        long = "jupyterhub-ip",
        alias = "jupyterhub_ip",
        env = "BINDER_JUPYTERHUB_IP",
        value_parser = HubAddress::parse
    )]
    jupyterhub_ip: Option<HubAddress>,
    /// Template config file
    #[arg(long, default_value = DEFAULT_TEMPLATE_PATH, env = "BINDER_CONFIG_TEMPLATE")]
    template: PathBuf,
    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    force: bool,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Output file for the config ("-" writes to stdout)
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output_file: String,
}

impl Cli {
    fn into_options(self) -> Result<GenerateOptions, AppError> {
        let mut options = GenerateOptions::new(self.docker_id, self.prefix)?
            .with_template_path(self.template)
            .with_output(OutputTarget::from_arg(&self.output_file))
            .with_force(self.force);
        if let Some(docker_org) = self.docker_org {
            options = options.with_docker_org(docker_org)?;
        }
        if let Some(hub_address) = self.jupyterhub_ip {
            options = options.with_hub_address(hub_address);
        }
        Ok(options)
    }
}

/// Parse process-style arguments (including the program name) into options.
pub fn parse_options<I, T>(args: I) -> Result<GenerateOptions, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(normalize_legacy_flags(args))
        .map_err(|err| AppError::usage(err.to_string()))?;
    cli.into_options()
}

/// Single-dash long flags accepted by the original script, mapped to their clap spelling.
const LEGACY_FLAGS: [(&str, &str); 2] = [("-id", "--docker-id"), ("-org", "--docker-org")];

/// Rewrite `-id`/`-org` (also `-id=value`) before clap splits them into short flags.
///
/// Arguments after `--` are left untouched.
fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if after_separator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_separator = true;
                return arg;
            }
            for (legacy, long) in LEGACY_FLAGS {
                if text == legacy {
                    return OsString::from(long);
                }
                let inline_value = text.strip_prefix(legacy).and_then(|rest| rest.strip_prefix('='));
                if let Some(value) = inline_value {
                    return OsString::from(format!("{long}={value}"));
                }
            }
            arg
        })
        .collect()
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    logging::init(cli.verbose);

    let result = cli.into_options().and_then(|options| run_generate(&options));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_generate(options: &GenerateOptions) -> Result<(), AppError> {
    let outcome = crate::app::api::generate(options)?;

    match &outcome.output {
        Some(path) => {
            if outcome.replaced_existing {
                println!("✅ Replaced {}", path.display());
            } else {
                println!("✅ Wrote {}", path.display());
            }
        }
        None => print!("{}", outcome.rendered),
    }
    Ok(())
}
