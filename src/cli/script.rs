use std::fs;
use std::path::PathBuf;

use clap::Args;
use inquire::{Confirm, Text};

use super::pickers::{confirm_action, get_or_pick_script, pick_category};
use super::{init_shelf, print_notice, require_owner};
use crate::app::DELETE_SCRIPT_PROMPT;
use crate::types::ScriptDraft;

/// Script form fields shared by `script add` and `script edit`
#[derive(Args, Debug, Default)]
pub struct ScriptFields {
    /// Script title
    #[arg(long)]
    pub title: Option<String>,

    /// Short description
    #[arg(long)]
    pub description: Option<String>,

    /// Category name
    #[arg(long)]
    pub category: Option<String>,

    /// Script source
    #[arg(long)]
    pub content: Option<String>,

    /// Read the script source from a file
    #[arg(long, conflicts_with = "content")]
    pub content_file: Option<PathBuf>,

    /// External link (defaults to the configured URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Tag, repeatable; replaces existing tags when given
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Preview image URL
    #[arg(long)]
    pub preview_image_url: Option<String>,

    /// Whether the script is a browser userscript (true/false)
    #[arg(long)]
    pub external_tool: Option<bool>,
}

impl ScriptFields {
    fn content(&self) -> anyhow::Result<Option<String>> {
        match (&self.content, &self.content_file) {
            (Some(content), _) => Ok(Some(content.clone())),
            (None, Some(path)) => Ok(Some(fs::read_to_string(path)?)),
            (None, None) => Ok(None),
        }
    }

    fn tags(&self) -> Option<Vec<String>> {
        if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.clone())
        }
    }
}

fn required_text(label: &str) -> anyhow::Result<String> {
    Ok(Text::new(label)
        .with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok(inquire::validator::Validation::Invalid(
                    "This field is required".into(),
                ))
            } else {
                Ok(inquire::validator::Validation::Valid)
            }
        })
        .prompt()?)
}

pub fn run_script_add(
    data_dir: &str,
    fields: ScriptFields,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;
    require_owner(&shelf)?;

    let title = match &fields.title {
        Some(t) if t.trim().is_empty() => anyhow::bail!("--title cannot be empty"),
        Some(t) => t.clone(),
        None if non_interactive => anyhow::bail!("--title is required in non-interactive mode"),
        None => required_text("Title:")?,
    };

    let description = match &fields.description {
        Some(d) => d.clone(),
        None if non_interactive => String::new(),
        None => Text::new("Description:").prompt()?,
    };

    let category = match &fields.category {
        Some(c) if c.trim().is_empty() => anyhow::bail!("--category cannot be empty"),
        Some(c) => c.clone(),
        None if non_interactive => {
            anyhow::bail!("--category is required in non-interactive mode")
        }
        None => pick_category(shelf.catalog().categories(), None)?,
    };

    let is_external_tool = match fields.external_tool {
        Some(flag) => flag,
        None if non_interactive => false,
        None => Confirm::new("Is this a Tampermonkey userscript?")
            .with_default(false)
            .prompt()?,
    };

    let content = match fields.content()? {
        Some(c) => c,
        None if non_interactive => {
            anyhow::bail!("--content or --content-file is required in non-interactive mode")
        }
        None => required_text("Content:")?,
    };

    let url = match &fields.url {
        Some(u) => u.clone(),
        None if non_interactive => String::new(),
        None => Text::new("URL:")
            .with_placeholder(&shelf.config().default_script_url)
            .prompt()?,
    };

    let draft = ScriptDraft {
        title,
        description,
        category,
        is_external_tool,
        content,
        url,
        tags: fields.tags(),
        preview_image_url: fields.preview_image_url.clone(),
    };

    let (id, notice) = shelf.create_script(draft)?;

    println!();
    print_notice(&notice);
    println!("Script ID: {id}");
    println!();

    Ok(())
}

pub fn run_script_edit(
    data_dir: &str,
    id: Option<i64>,
    fields: ScriptFields,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;
    require_owner(&shelf)?;

    let id = get_or_pick_script(shelf.catalog().scripts(), id, non_interactive)?;
    let Some(existing) = shelf.catalog().get(id).cloned() else {
        anyhow::bail!("Script {id} not found");
    };

    let prompt_or_keep = |given: &Option<String>, label: &str, current: &str| {
        match given {
            Some(value) => Ok(value.clone()),
            None if non_interactive => Ok(current.to_string()),
            None => Text::new(label).with_initial_value(current).prompt(),
        }
    };

    let title = prompt_or_keep(&fields.title, "Title:", &existing.title)?;
    if title.trim().is_empty() {
        anyhow::bail!("Title cannot be empty");
    }
    let description = prompt_or_keep(&fields.description, "Description:", &existing.description)?;

    let category = match &fields.category {
        Some(c) => c.clone(),
        None if non_interactive => existing.category.clone(),
        None => pick_category(shelf.catalog().categories(), Some(&existing.category))?,
    };

    let is_external_tool = match fields.external_tool {
        Some(flag) => flag,
        None if non_interactive => existing.is_external_tool,
        None => Confirm::new("Is this a Tampermonkey userscript?")
            .with_default(existing.is_external_tool)
            .prompt()?,
    };

    let content = match fields.content()? {
        Some(c) => c,
        None => prompt_or_keep(&None, "Content:", &existing.content)?,
    };
    let url = prompt_or_keep(&fields.url, "URL:", &existing.url)?;

    let draft = ScriptDraft {
        title,
        description,
        category,
        is_external_tool,
        content,
        url,
        tags: fields.tags(),
        preview_image_url: fields.preview_image_url.clone(),
    };

    match shelf.update_script(id, draft)? {
        Some(notice) => {
            println!();
            print_notice(&notice);
            println!();
        }
        None => anyhow::bail!("Script {id} not found"),
    }

    Ok(())
}

pub fn run_script_delete(
    data_dir: &str,
    id: Option<i64>,
    non_interactive: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;
    require_owner(&shelf)?;

    let id = get_or_pick_script(shelf.catalog().scripts(), id, non_interactive)?;
    let Some(script) = shelf.catalog().get(id) else {
        anyhow::bail!("Script {id} not found");
    };

    if !yes && !non_interactive {
        println!();
        println!("Script: {} [{}]", script.title, script.category);
        println!();
    }

    let confirmed = confirm_action(DELETE_SCRIPT_PROMPT, yes, non_interactive)?;
    match shelf.delete_script(id, confirmed)? {
        Some(notice) => print_notice(&notice),
        None => println!("Cancelled."),
    }

    Ok(())
}
