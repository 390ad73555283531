use super::init_shelf;
use crate::types::Theme;

pub fn run_theme_show(data_dir: &str) -> anyhow::Result<()> {
    let shelf = init_shelf(data_dir)?;
    println!("{}", shelf.theme());
    Ok(())
}

pub fn run_theme_toggle(data_dir: &str) -> anyhow::Result<()> {
    let mut shelf = init_shelf(data_dir)?;
    let theme = shelf.toggle_theme()?;
    println!("Theme set to {theme}");
    Ok(())
}

pub fn run_theme_set(data_dir: &str, theme: &str) -> anyhow::Result<()> {
    let theme: Theme = theme.parse().map_err(anyhow::Error::msg)?;
    let mut shelf = init_shelf(data_dir)?;
    shelf.set_theme(theme)?;
    println!("Theme set to {theme}");
    Ok(())
}
