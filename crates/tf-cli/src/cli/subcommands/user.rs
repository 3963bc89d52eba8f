use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Register a user.
    Add {
        #[arg(long)]
        name: String,
        /// admin, manager, or employee
        #[arg(long, default_value = "employee")]
        role: String,
    },
    /// List users with their roles.
    List,
    /// Change a user's role (admins only).
    Role { user_id: String, role: String },
}
