use crate::harness::TestContext;
use serde_yaml::Value;

#[test]
fn organisation_replaces_docker_id_and_hub_url_is_added() {
    let ctx = TestContext::new();

    ctx.generate()
        .args(["--docker-org", "myorg", "--jupyterhub-ip", "10.0.0.5"])
        .assert()
        .success();

    let output = ctx.read_yaml("config.yaml");
    assert_eq!(output["config"]["BinderHub"]["image_prefix"], Value::from("myorg-binder-"));
    assert_eq!(output["hub"]["url"], Value::from("http://10.0.0.5"));
    assert_eq!(output["hub"].as_mapping().map(|hub| hub.len()), Some(1));
}

#[test]
fn hub_url_replaces_existing_hub_section() {
    let ctx = TestContext::empty();
    ctx.write_file(
        "config-template.yaml",
        "hub:\n  url: http://old\n  extra: kept?\nconfig:\n  BinderHub:\n    image_prefix: <docker-id>/<prefix>\n",
    );

    ctx.generate().args(["--jupyterhub-ip", "hub.example.org:8000"]).assert().success();

    let output = ctx.read_yaml("config.yaml");
    let hub = output["hub"].as_mapping().expect("hub mapping");
    assert_eq!(hub.len(), 1);
    assert_eq!(output["hub"]["url"], Value::from("http://hub.example.org:8000"));
}

#[test]
fn existing_hub_section_passes_through_without_hub_address() {
    let ctx = TestContext::empty();
    ctx.write_file(
        "config-template.yaml",
        "hub:\n  url: http://old\nconfig:\n  BinderHub:\n    image_prefix: <docker-id>/<prefix>\n",
    );

    ctx.generate().assert().success();

    let output = ctx.read_yaml("config.yaml");
    assert_eq!(output["hub"]["url"], Value::from("http://old"));
}
