use binder_config::{AppError, GenerateOptions, HubAddress, OutputTarget, generate_at};
use serde_yaml::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TEMPLATE: &str = "config:\n  BinderHub:\n    image_prefix: <docker-id>-<prefix>-\n";

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config-template.yaml"), TEMPLATE).unwrap();
    temp
}

#[test]
fn public_api_generates_login_config() {
    let temp = workspace();
    let options = GenerateOptions::new("alice", "binder").unwrap();

    let outcome = generate_at(temp.path(), &options).expect("generate failed");

    assert_eq!(outcome.image_prefix, "alice-binder-");
    assert_eq!(outcome.output, Some(PathBuf::from("config.yaml")));
    let output: Value =
        serde_yaml::from_str(&fs::read_to_string(temp.path().join("config.yaml")).unwrap())
            .unwrap();
    assert_eq!(output["config"]["BinderHub"]["image_prefix"], Value::from("alice-binder-"));
    assert!(output.get("hub").is_none());
}

#[test]
fn public_api_generates_org_and_hub_config() {
    let temp = workspace();
    let options = GenerateOptions::new("alice", "binder")
        .unwrap()
        .with_docker_org("myorg")
        .unwrap()
        .with_hub_address(HubAddress::parse("10.0.0.5").unwrap());

    let outcome = generate_at(temp.path(), &options).expect("generate failed");

    assert_eq!(outcome.image_prefix, "myorg-binder-");
    assert_eq!(outcome.hub_url.as_deref(), Some("http://10.0.0.5"));
    let output: Value =
        serde_yaml::from_str(&fs::read_to_string(temp.path().join("config.yaml")).unwrap())
            .unwrap();
    assert_eq!(output["hub"]["url"], Value::from("http://10.0.0.5"));
}

#[test]
fn public_api_refuses_existing_output() {
    let temp = workspace();
    fs::write(temp.path().join("config.yaml"), "keep: me\n").unwrap();
    let options = GenerateOptions::new("alice", "binder").unwrap();

    let err = generate_at(temp.path(), &options).unwrap_err();

    assert!(matches!(err, AppError::OutputExists { .. }));
    assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);
    assert_eq!(fs::read_to_string(temp.path().join("config.yaml")).unwrap(), "keep: me\n");
}

#[test]
fn public_api_renders_to_stdout_target_without_writing() {
    let temp = workspace();
    let options =
        GenerateOptions::new("alice", "binder").unwrap().with_output(OutputTarget::Stdout);

    let outcome = generate_at(temp.path(), &options).expect("generate failed");

    assert!(outcome.output.is_none());
    assert!(outcome.rendered.contains("alice-binder-"));
    assert!(!temp.path().join("config.yaml").exists());
}
