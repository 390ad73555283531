use inquire::Select;

use super::pickers::confirm_action;
use super::{init_shelf, require_owner};

pub fn run_category_list(data_dir: &str, json: bool) -> anyhow::Result<()> {
    let shelf = init_shelf(data_dir)?;
    let categories = shelf.catalog().categories();

    if json {
        println!("{}", serde_json::to_string_pretty(categories)?);
    } else if categories.is_empty() {
        println!("No categories.");
    } else {
        for name in categories {
            println!("{name}");
        }
    }

    Ok(())
}

pub fn run_category_add(data_dir: &str, name: &str) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;
    require_owner(&shelf)?;

    if shelf.add_category(name)? {
        println!("Added category '{}'", name.trim());
    } else {
        println!("Category '{}' not added (empty or already exists)", name.trim());
    }

    Ok(())
}

pub fn run_category_delete(
    data_dir: &str,
    name: Option<String>,
    non_interactive: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;
    require_owner(&shelf)?;

    let name = if let Some(n) = name {
        n.trim().to_string()
    } else if non_interactive {
        anyhow::bail!("A category name is required in non-interactive mode");
    } else {
        let categories = shelf.catalog().categories().to_vec();
        if categories.is_empty() {
            anyhow::bail!("No categories to delete.");
        }
        Select::new("Select category:", categories).prompt()?
    };

    if !shelf.catalog().categories().contains(&name) {
        anyhow::bail!("Category '{name}' not found");
    }

    let used_by = shelf
        .catalog()
        .scripts()
        .iter()
        .filter(|s| s.category == name)
        .count();
    if used_by > 0 && !non_interactive {
        println!("{used_by} script(s) will keep '{name}' as their category.");
    }

    let confirmed = confirm_action(
        &format!("Delete category '{name}'?"),
        yes,
        non_interactive,
    )?;

    if shelf.delete_category(&name, confirmed)? {
        println!("Deleted category '{name}'");
    } else {
        println!("Cancelled.");
    }

    Ok(())
}
