use crate::di::Services;

pub fn run(services: &Services, json: bool) -> anyhow::Result<()> {
    let rendered = if json {
        serde_json::to_string_pretty(services.config.as_ref())?
    } else {
        toml::to_string_pretty(services.config.as_ref())?
    };
    println!("{}", rendered);
    Ok(())
}
