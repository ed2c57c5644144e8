use tsmapper_api::TypeDescriptor;

pub fn descriptor_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(TypeDescriptor);
    serde_json::to_string_pretty(&schema)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", descriptor_schema()?);
    Ok(())
}
