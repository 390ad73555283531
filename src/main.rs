use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scriptshelf::cli::{
    AuthCommands, CategoryCommands, FavoriteCommands, ScriptCommands, ThemeCommands,
    run_auth_login, run_auth_logout, run_auth_whoami, run_category_add, run_category_delete,
    run_category_list, run_copy, run_dashboard, run_favorite_list, run_favorite_prune,
    run_favorite_toggle, run_list, run_render, run_script_add, run_script_delete, run_script_edit,
    run_show, run_theme_set, run_theme_show, run_theme_toggle,
};

#[derive(Parser)]
#[command(name = "scriptshelf")]
#[command(about = "A catalog for sharing code snippets", long_about = None)]
struct Cli {
    /// Data directory holding the catalog database
    #[arg(long, global = true, default_value = "./data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List scripts, optionally filtered
    List {
        /// Category name, or "All" / "Favorites"
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive text matched against title, description and tags
        #[arg(long, short)]
        query: Option<String>,

        /// Only favorite scripts
        #[arg(long, conflicts_with = "category")]
        favorites: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a script with its content
    Show {
        /// Script ID
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy a script's content to the clipboard and count the copy
    Copy {
        /// Script ID
        id: i64,

        /// Write the content to stdout instead of the system clipboard
        #[arg(long)]
        print: bool,
    },

    /// Manage favorites
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommands,
    },

    /// Sign in and out
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// Light or dark theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Manage scripts (owner only)
    Script {
        #[command(subcommand)]
        command: ScriptCommands,
    },

    /// Show catalog statistics (owner only)
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the catalog page as HTML
    Render {
        /// Output file (defaults to stdout)
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Category name, or "All" / "Favorites"
        #[arg(long)]
        category: Option<String>,

        /// Search text
        #[arg(long, short)]
        query: Option<String>,

        /// Only favorite scripts
        #[arg(long, conflicts_with = "category")]
        favorites: bool,

        /// Include the owner dashboard
        #[arg(long)]
        dashboard: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scriptshelf=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_str();

    match cli.command {
        Commands::List {
            category,
            query,
            favorites,
            json,
        } => run_list(data_dir, category, query, favorites, json)?,
        Commands::Show { id, json } => run_show(data_dir, id, json)?,
        Commands::Copy { id, print } => run_copy(data_dir, id, print).await?,
        Commands::Favorite { command } => match command {
            FavoriteCommands::Toggle { id } => run_favorite_toggle(data_dir, id)?,
            FavoriteCommands::List { json } => run_favorite_list(data_dir, json)?,
            FavoriteCommands::Prune => run_favorite_prune(data_dir)?,
        },
        Commands::Auth { command } => match command {
            AuthCommands::Login {
                identifier,
                secret,
                non_interactive,
            } => run_auth_login(data_dir, identifier, secret, non_interactive)?,
            AuthCommands::Logout => run_auth_logout(data_dir)?,
            AuthCommands::Whoami { json } => run_auth_whoami(data_dir, json)?,
        },
        Commands::Theme { command } => match command {
            ThemeCommands::Show => run_theme_show(data_dir)?,
            ThemeCommands::Toggle => run_theme_toggle(data_dir)?,
            ThemeCommands::Set { theme } => run_theme_set(data_dir, &theme)?,
        },
        Commands::Category { command } => match command {
            CategoryCommands::List { json } => run_category_list(data_dir, json)?,
            CategoryCommands::Add { name } => run_category_add(data_dir, &name)?,
            CategoryCommands::Delete {
                name,
                non_interactive,
                yes,
            } => run_category_delete(data_dir, name, non_interactive, yes)?,
        },
        Commands::Script { command } => match command {
            ScriptCommands::Add {
                fields,
                non_interactive,
            } => run_script_add(data_dir, fields, non_interactive)?,
            ScriptCommands::Edit {
                id,
                fields,
                non_interactive,
            } => run_script_edit(data_dir, id, fields, non_interactive)?,
            ScriptCommands::Delete {
                id,
                non_interactive,
                yes,
            } => run_script_delete(data_dir, id, non_interactive, yes)?,
        },
        Commands::Dashboard { json } => run_dashboard(data_dir, json)?,
        Commands::Render {
            out,
            category,
            query,
            favorites,
            dashboard,
        } => run_render(data_dir, out, category, query, favorites, dashboard)?,
    }

    Ok(())
}
