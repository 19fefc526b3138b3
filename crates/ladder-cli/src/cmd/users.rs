use crate::output::print_json;
use anyhow::Result;
use ladder_core::config::Config;

pub fn run(config: &Config, json: bool) -> Result<()> {
    if json {
        return print_json(&config.users);
    }
    for user in &config.users {
        println!("{user}");
    }
    Ok(())
}
