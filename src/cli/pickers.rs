use std::fmt;

use inquire::Select;

use crate::types::Script;

/// Script with its category for display
pub struct ScriptDisplay {
    pub id: i64,
    pub title: String,
    pub category: String,
}

impl fmt::Display for ScriptDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] ({})", self.title, self.category, self.id)
    }
}

impl From<&Script> for ScriptDisplay {
    fn from(script: &Script) -> Self {
        Self {
            id: script.id,
            title: script.title.clone(),
            category: script.category.clone(),
        }
    }
}

/// Request confirmation for a destructive operation
pub fn confirm_action(message: &str, yes: bool, non_interactive: bool) -> anyhow::Result<bool> {
    if yes {
        Ok(true)
    } else if non_interactive {
        anyhow::bail!("--yes is required for destructive operations in non-interactive mode");
    } else {
        Ok(inquire::Confirm::new(message)
            .with_default(false)
            .prompt()?)
    }
}

/// Use the given ID, or pick a script interactively
pub fn get_or_pick_script(
    scripts: &[Script],
    id: Option<i64>,
    non_interactive: bool,
) -> anyhow::Result<i64> {
    if let Some(id) = id {
        return Ok(id);
    }
    if non_interactive {
        anyhow::bail!("--id is required in non-interactive mode");
    }
    if scripts.is_empty() {
        anyhow::bail!("No scripts in the catalog.");
    }

    let options: Vec<ScriptDisplay> = scripts.iter().map(ScriptDisplay::from).collect();
    let selected = Select::new("Select script:", options).prompt()?;
    Ok(selected.id)
}

/// Pick a category from the list, starting at `current` when it is listed
pub fn pick_category(categories: &[String], current: Option<&str>) -> anyhow::Result<String> {
    if categories.is_empty() {
        return Ok(inquire::Text::new("Category:").prompt()?);
    }

    let start = current
        .and_then(|c| categories.iter().position(|name| name == c))
        .unwrap_or(0);
    Ok(Select::new("Category:", categories.to_vec())
        .with_starting_cursor(start)
        .prompt()?)
}

pub fn print_scripts(scripts: &[&Script], favorites: &[i64]) {
    if scripts.is_empty() {
        println!("No scripts found matching your criteria.");
        return;
    }

    println!();
    for script in scripts {
        let star = if favorites.contains(&script.id) { "*" } else { " " };
        println!(
            "{star} {:>14}  {}  [{}]  copied {}x",
            script.id, script.title, script.category, script.copy_count
        );
        if !script.description.is_empty() {
            println!("  {:>14}  {}", "", script.description);
        }
    }
    println!();
}
