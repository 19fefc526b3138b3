use crate::output::{print_json, print_table};
use anyhow::Result;
use ladder_core::catalog;

pub fn run(json: bool) -> Result<()> {
    if json {
        return print_json(&catalog::categories());
    }

    let rows: Vec<Vec<String>> = catalog::categories()
        .iter()
        .flat_map(|category| {
            category.items.iter().map(|item| {
                vec![
                    category.name.to_string(),
                    item.id.to_string(),
                    item.title.to_string(),
                    item.description.to_string(),
                ]
            })
        })
        .collect();

    print_table(&["category", "id", "title", "goal"], rows);
    Ok(())
}
