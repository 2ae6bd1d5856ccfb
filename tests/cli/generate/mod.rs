mod org_and_hub_contract;
mod rejects_existing_output_contract;
mod writes_substituted_config_contract;
