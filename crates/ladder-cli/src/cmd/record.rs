use crate::output::print_json;
use anyhow::Result;
use ladder_core::config::Config;
use ladder_core::level::Level;
use ladder_core::record::ProgressRecord;
use ladder_core::{catalog, store, LadderError};

pub fn run(
    config: &Config,
    user: &str,
    item_id: &str,
    level: u8,
    comment: &str,
    json: bool,
) -> Result<()> {
    let (category, item) = catalog::find_item(item_id)
        .ok_or_else(|| LadderError::UnknownItem(item_id.to_string()))?;
    let level = Level::try_from(level)?;

    let record = ProgressRecord::new(user, category.name, item.id, item.title, level, comment);
    let sheet_store = config.open_store()?;
    let submission = store::submit(sheet_store.as_ref(), &config.worksheet, record)?;

    if json {
        return print_json(&submission);
    }

    println!(
        "recorded {} → {} ({})",
        item.id,
        submission.record.level.label(),
        submission.record.updated_at.format("%Y-%m-%d %H:%M:%S"),
    );
    if submission.milestone {
        println!("🎉 「{}」が自立レベルになりました！", item.title);
    }
    Ok(())
}
