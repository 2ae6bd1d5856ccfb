use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_rejects_existing_output() {
    let ctx = TestContext::new();
    ctx.write_file("config.yaml", "hand: edited\n");

    ctx.generate()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists").and(predicate::str::contains("config.yaml")));

    assert_eq!(ctx.read_file("config.yaml"), "hand: edited\n");
}

#[test]
fn generate_rejects_existing_output_even_with_broken_template() {
    let ctx = TestContext::empty();
    ctx.write_file("config-template.yaml", "config: [unclosed");
    ctx.write_file("config.yaml", "hand: edited\n");

    ctx.generate().assert().failure().stderr(predicate::str::contains("already exists"));

    assert_eq!(ctx.read_file("config.yaml"), "hand: edited\n");
}
