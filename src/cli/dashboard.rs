use serde::Serialize;

use super::{init_shelf, require_owner};
use crate::catalog::CatalogStats;

#[derive(Serialize)]
struct ScriptRow {
    id: i64,
    title: String,
    category: String,
    kind: &'static str,
    copy_count: u64,
}

#[derive(Serialize)]
struct DashboardOutput {
    stats: CatalogStats,
    categories: Vec<String>,
    dangling_favorites: Vec<i64>,
    scripts: Vec<ScriptRow>,
}

pub fn run_dashboard(data_dir: &str, json: bool) -> anyhow::Result<()> {
    let shelf = init_shelf(data_dir)?;
    require_owner(&shelf)?;

    let catalog = shelf.catalog();
    let stats = catalog.stats();

    if json {
        let output = DashboardOutput {
            stats,
            categories: catalog.categories().to_vec(),
            dangling_favorites: catalog.dangling_favorites(),
            scripts: catalog
                .scripts()
                .iter()
                .map(|s| ScriptRow {
                    id: s.id,
                    title: s.title.clone(),
                    category: s.category.clone(),
                    kind: s.kind_label(),
                    copy_count: s.copy_count,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("Owner Dashboard");
    println!("{}", "─".repeat(20));
    println!("Scripts:     {}", stats.total_scripts);
    println!("Categories:  {}", stats.total_categories);
    println!(
        "Favorites:   {} ({} dangling)",
        stats.favorites, stats.dangling_favorites
    );
    println!("Copies:      {}", stats.total_copies);
    println!();

    for script in catalog.scripts() {
        println!(
            "{:>14}  {:<32}  {:<12}  {:<12}  {}",
            script.id,
            script.title,
            script.category,
            script.kind_label(),
            script.copy_count
        );
    }
    println!();

    Ok(())
}
