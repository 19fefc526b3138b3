use crate::output::{print_json, print_table};
use anyhow::Result;
use ladder_core::config::Config;
use ladder_core::{catalog, progress};

pub fn run(config: &Config, user: &str, json: bool) -> Result<()> {
    let store = config.open_store()?;
    let rows = store.read(&config.worksheet)?;
    let levels = progress::reduce(&rows, user);
    let report = progress::report(&levels);

    if json {
        return print_json(&serde_json::json!({
            "user": user,
            "levels": levels,
            "total_items": report.total_items,
            "cleared_count": report.cleared_count,
            "remaining": report.remaining,
            "rate": report.rate,
            "categories": report.categories,
        }));
    }

    let table: Vec<Vec<String>> = catalog::categories()
        .iter()
        .flat_map(|category| {
            category.items.iter().map(|item| {
                let level = progress::level_for(&levels, item.id);
                vec![
                    item.id.to_string(),
                    item.title.to_string(),
                    level.label().to_string(),
                    if level.is_cleared() { "✅".to_string() } else { String::new() },
                ]
            })
        })
        .collect();

    print_table(&["id", "title", "level", "cleared"], table);
    println!();
    println!(
        "{}: {} / {} cleared ({:.0}%)",
        user,
        report.cleared_count,
        report.total_items,
        report.rate * 100.0
    );
    Ok(())
}
