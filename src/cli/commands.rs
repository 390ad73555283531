use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Sign in (any identifier is accepted; the owner pair unlocks the dashboard)
    Login {
        /// Identifier, usually an e-mail address
        #[arg(long)]
        identifier: Option<String>,

        /// Secret for the identifier
        #[arg(long)]
        secret: Option<String>,

        /// Skip interactive prompts (requires --identifier)
        #[arg(long)]
        non_interactive: bool,
    },

    /// Sign out
    Logout,

    /// Show the current session
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// Add a script to favorites, or remove it if already there
    Toggle {
        /// Script ID
        id: i64,
    },

    /// List favorite scripts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drop favorites whose script no longer exists
    Prune,
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,

    /// Switch between light and dark
    Toggle,

    /// Set the theme explicitly
    Set {
        /// light or dark
        theme: String,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a category (owner only)
    Add {
        /// Category name
        name: String,
    },

    /// Delete a category (owner only); scripts keep their category text
    Delete {
        /// Category name
        name: Option<String>,

        /// Skip interactive prompts (requires a name)
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ScriptCommands {
    /// Add a script (owner only)
    Add {
        #[command(flatten)]
        fields: super::ScriptFields,

        /// Skip interactive prompts (requires --title, --category and --content)
        #[arg(long)]
        non_interactive: bool,
    },

    /// Edit a script (owner only); omitted fields keep their value
    Edit {
        /// Script ID to edit
        #[arg(long)]
        id: Option<i64>,

        #[command(flatten)]
        fields: super::ScriptFields,

        /// Skip interactive prompts (requires --id)
        #[arg(long)]
        non_interactive: bool,
    },

    /// Delete a script (owner only); favorites keep pointing at it
    Delete {
        /// Script ID to delete
        #[arg(long)]
        id: Option<i64>,

        /// Skip interactive prompts (requires --id)
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
