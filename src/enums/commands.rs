use clap::Subcommand;
use crate::config::constants::DEFAULT_LIST_LIMIT;
use crate::enums::user_role::UserRole;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// Create a new account on the backend
    Register {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
        #[clap(long)]
        full_name: String,
        #[clap(long, value_enum, default_value_t = UserRole::User)]
        role: UserRole,
    },
    /// Sign in and store the access token
    Login {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    /// Forget the stored access token
    Logout,
    /// Show the signed-in profile
    Whoami,
    /// List all users (admin only)
    Users,
    /// List metric records, optionally filtered by category
    List {
        #[clap(long, default_value_t = 0)]
        skip: usize,
        #[clap(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
        #[clap(short, long)]
        category: Option<String>,
    },
    /// Show one metric record
    Show {
        id: i64,
    },
    /// Store a single metric record
    Create {
        #[clap(short, long)]
        name: String,
        #[clap(short, long, allow_negative_numbers = true)]
        value: f64,
        #[clap(short, long)]
        category: String,
    },
    /// Update a metric record (admin only)
    Update {
        id: i64,
        #[clap(short, long)]
        name: Option<String>,
        #[clap(short, long, allow_negative_numbers = true)]
        value: Option<f64>,
        #[clap(short, long)]
        category: Option<String>,
    },
    /// Delete a metric record (admin only)
    Delete {
        id: i64,
        #[clap(short, long)]
        yes: bool,
    },
    /// Insert the sample metrics used by the dashboard
    Seed,
    /// Print the dashboard summary
    Summary {
        #[clap(long)]
        json: bool,
    },
    /// Serve the dashboard in the browser
    Dashboard {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        no_open: bool,
    },
}
