use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use super::pickers::print_scripts;
use super::{init_shelf, print_notice};
use crate::clipboard::{Clipboard, StdoutClipboard, SystemClipboard};
use crate::types::CategoryFilter;

fn selector(category: Option<String>, favorites: bool) -> CategoryFilter {
    if favorites {
        CategoryFilter::Favorites
    } else {
        category
            .as_deref()
            .map(CategoryFilter::from)
            .unwrap_or_default()
    }
}

pub fn run_list(
    data_dir: &str,
    category: Option<String>,
    query: Option<String>,
    favorites: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;

    shelf.set_filter(selector(category, favorites));
    if let Some(q) = query {
        shelf.set_query(&q);
    }

    let scripts = shelf.visible_scripts();
    if json {
        println!("{}", serde_json::to_string_pretty(&scripts)?);
    } else {
        print_scripts(&scripts, shelf.catalog().favorites());
    }

    Ok(())
}

pub fn run_show(data_dir: &str, id: i64, json: bool) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;

    let Some(script) = shelf.show_script(id) else {
        anyhow::bail!("Script {id} not found");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(script)?);
        return Ok(());
    }

    println!();
    println!("{} [{}]", script.title, script.category);
    println!("{}", "─".repeat(script.title.chars().count().max(20)));
    if !script.description.is_empty() {
        println!("{}", script.description);
    }
    if !script.tags.is_empty() {
        println!("Tags:    {}", script.tags.join(", "));
    }
    println!("Type:    {}", script.kind_label());
    println!("URL:     {}", script.url);
    println!("Copied:  {}", script.copy_count);
    println!();
    println!("{}", script.content);
    println!();

    Ok(())
}

pub async fn run_copy(data_dir: &str, id: i64, print: bool) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;

    let clipboard: Arc<dyn Clipboard> = if print {
        Arc::new(StdoutClipboard)
    } else {
        Arc::new(SystemClipboard)
    };

    match shelf.copy_script(id, clipboard).await? {
        Some(notice) if notice.is_error() => anyhow::bail!("{}", notice.message),
        Some(notice) => {
            // stdout carries the script itself when printing
            if print {
                eprintln!("{}", notice.message);
            } else {
                print_notice(&notice);
            }
        }
        None => anyhow::bail!("Script {id} not found"),
    }

    Ok(())
}

pub fn run_render(
    data_dir: &str,
    out: Option<PathBuf>,
    category: Option<String>,
    query: Option<String>,
    favorites: bool,
    dashboard: bool,
) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;

    shelf.set_filter(selector(category, favorites));
    if let Some(q) = query {
        shelf.set_query(&q);
    }
    if dashboard && !shelf.open_dashboard() {
        anyhow::bail!("The dashboard is only available to the owner session.");
    }

    let page = shelf.render_page();
    match out {
        Some(path) => {
            fs::write(&path, page)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{page}"),
    }

    Ok(())
}
