pub mod add;
pub mod between;
pub mod check;
pub mod list;
pub mod roll;
pub mod schema;

// -----------------------------------------------------------------------------
// Cmd
// -----------------------------------------------------------------------------
pub trait Cmd {
    fn run(&self) -> anyhow::Result<()>;
}

// -----------------------------------------------------------------------------
// Commands
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Classify a date
    Check(check::Args),
    /// Roll a date to the nearest business day
    Roll(roll::Args),
    /// Add (or subtract with a negative number) business days to a date
    Add(add::Args),
    /// Count business days after a date up to and including another date
    Between(between::Args),
    /// List calendars found in the calendar directories
    List(list::Args),
    /// Print the JSON schema of calendar files
    Schema(schema::Args),
}

impl Cmd for Commands {
    fn run(&self) -> anyhow::Result<()> {
        match self {
            Commands::Check(args) => args.run(),
            Commands::Roll(args) => args.run(),
            Commands::Add(args) => args.run(),
            Commands::Between(args) => args.run(),
            Commands::List(args) => args.run(),
            Commands::Schema(args) => args.run(),
        }
    }
}
