use crate::harness::{DEFAULT_TEMPLATE, TestContext};
use predicates::prelude::*;
use serde_yaml::Value;

#[test]
fn generate_writes_substituted_config() {
    let ctx = TestContext::new();

    ctx.generate().assert().success().stdout(predicate::str::contains("Wrote config.yaml"));

    let output = ctx.read_yaml("config.yaml");
    assert_eq!(output["config"]["BinderHub"]["image_prefix"], Value::from("alice-binder-"));
    assert!(output.get("hub").is_none(), "hub should not be added without --jupyterhub-ip");
}

#[test]
fn generate_preserves_unrelated_fields() {
    let ctx = TestContext::new();

    ctx.generate().assert().success();

    let template: Value = serde_yaml::from_str(DEFAULT_TEMPLATE).unwrap();
    let output = ctx.read_yaml("config.yaml");
    assert_eq!(output["jupyterhub"], template["jupyterhub"]);
    assert_eq!(output["registry"], template["registry"]);
    assert_eq!(output["config"]["BinderHub"]["use_registry"], Value::Bool(true));
}

#[test]
fn generate_output_is_block_style() {
    let ctx = TestContext::new();

    ctx.generate().assert().success();

    let text = ctx.read_file("config.yaml");
    assert!(text.starts_with("jupyterhub:\n"), "unexpected output:\n{}", text);
    assert!(text.contains("\nconfig:\n  BinderHub:\n"), "unexpected output:\n{}", text);
    assert!(!text.contains('{'), "output should not use flow style:\n{}", text);
}

#[test]
fn generate_writes_to_positional_output_and_custom_template() {
    let ctx = TestContext::empty();
    ctx.write_file("templates/binder.yaml", DEFAULT_TEMPLATE);
    ctx.write_file("deploy/.keep", "");

    ctx.generate()
        .args(["--template", "templates/binder.yaml", "deploy/values.yaml"])
        .assert()
        .success();

    ctx.assert_file_exists("deploy/values.yaml");
    ctx.assert_file_not_exists("config.yaml");
    let output = ctx.read_yaml("deploy/values.yaml");
    assert_eq!(output["config"]["BinderHub"]["image_prefix"], Value::from("alice-binder-"));
}
