use clap::{Parser, Subcommand, ValueEnum};
use clientbook::api::{SearchField, SortOrder};
use clientbook::model::ClientId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clientbook", version)]
#[command(about = "Keep track of clients and what they buy", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use instead of the configured one
    #[arg(long, global = true, env = "CLIENTBOOK_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Directory holding config.json (and clients.json by default)
    #[arg(long, global = true, env = "CLIENTBOOK_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every client with spending totals
    #[command(alias = "ls")]
    List,

    /// Show one client and their recent purchases
    #[command(alias = "v")]
    Show { id: ClientId },

    /// Add a client
    #[command(alias = "n")]
    Add {
        name: String,
        city: String,
        /// 9 digits starting with 2, 3, 6 or 7
        phone: String,

        /// Comma-separated tags (e.g. "vip,entreprise")
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Change some fields of a client
    #[command(alias = "u")]
    Update {
        id: ClientId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Comma-separated tags, replacing the current ones
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete a client
    #[command(alias = "rm")]
    Delete { id: ClientId },

    /// Record a purchase for a client
    Buy {
        id: ClientId,

        /// Amount as a whole number
        amount: String,

        /// Purchase date (YYYY-MM-DD), today when omitted
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Search clients by name or city
    Search {
        #[arg(value_enum)]
        field: FieldArg,
        query: String,
    },

    /// List clients in a given order
    Sort {
        #[arg(value_enum)]
        by: SortArg,
    },

    /// Run the scripted demonstration
    Demo,

    /// Interactive menu
    Menu,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, currency, recent-purchases)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FieldArg {
    Name,
    City,
}

impl From<FieldArg> for SearchField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => SearchField::Name,
            FieldArg::City => SearchField::City,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SortArg {
    Name,
    Spend,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortOrder::Name,
            SortArg::Spend => SortOrder::TotalSpend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_tags() {
        let cli = Cli::try_parse_from([
            "clientbook",
            "add",
            "Jean Mbarga",
            "Yaoundé",
            "677123456",
            "--tags",
            "vip,fidèle",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add { name, tags, .. }) => {
                assert_eq!(name, "Jean Mbarga");
                assert_eq!(tags.as_deref(), Some("vip,fidèle"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_search_field() {
        let cli = Cli::try_parse_from(["clientbook", "search", "city", "douala"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Search {
                field: FieldArg::City,
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["clientbook", "delete", "two"]).is_err());
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["clientbook", "--data", "x.json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data, Some(PathBuf::from("x.json")));
    }
}
