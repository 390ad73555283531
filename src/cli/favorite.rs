use super::pickers::print_scripts;
use super::{init_shelf, print_notice};
use crate::types::CategoryFilter;

pub fn run_favorite_toggle(data_dir: &str, id: i64) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;

    match shelf.toggle_favorite(id)? {
        Some(notice) => print_notice(&notice),
        None => anyhow::bail!("Script {id} not found"),
    }

    Ok(())
}

pub fn run_favorite_list(data_dir: &str, json: bool) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;
    shelf.set_filter(CategoryFilter::Favorites);

    let scripts = shelf.visible_scripts();
    if json {
        println!("{}", serde_json::to_string_pretty(&scripts)?);
    } else {
        print_scripts(&scripts, shelf.catalog().favorites());
    }

    Ok(())
}

pub fn run_favorite_prune(data_dir: &str) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;
    let removed = shelf.prune_favorites()?;

    if removed == 0 {
        println!("No dangling favorites.");
    } else {
        println!("Removed {removed} dangling favorite(s)");
    }

    Ok(())
}
