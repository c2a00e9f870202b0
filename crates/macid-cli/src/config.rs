use anyhow::bail;
use clap::{Parser, Subcommand};

/// Upper bound on the number of ids a single `new` invocation may mint.
pub const MAX_COUNT: usize = 1_000_000;

/// Command-line arguments for the `macid` binary.
///
/// Every flag may also be supplied through the environment variable named in
/// its help text, or through a `.env` file in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "macid",
    version,
    about = "Mint and inspect 12-byte request ids"
)]
pub struct CliArgs {
    /// Print JSON objects, one per line, instead of plain text.
    ///
    /// Environment variable: `MACID_JSON`
    #[arg(long, global = true, env = "MACID_JSON", default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mint new ids from a single generator.
    New {
        /// Number of ids to mint.
        ///
        /// Environment variable: `MACID_COUNT`
        #[arg(short = 'n', long, env = "MACID_COUNT", default_value_t = 1)]
        count: usize,
    },
    /// Print a sentinel id for a point in time. Sentinels are range-query
    /// bounds, never storage keys.
    At {
        /// Seconds since the Unix epoch.
        unix_secs: u64,
    },
    /// Decode ids and print their fields.
    Inspect {
        /// Ids in hex form.
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Exit with status 0 if the argument is a well-formed hex id, 1
    /// otherwise.
    Check {
        /// Candidate id in hex form.
        id: String,
    },
    /// Print this host's machine fingerprint and where it came from.
    Fingerprint,
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub json: bool,
    pub command: Command,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        match &args.command {
            Command::New { count } if *count == 0 => {
                bail!("count must be greater than 0");
            }
            Command::New { count } if *count > MAX_COUNT => {
                bail!("count ({count}) exceeds the maximum of {MAX_COUNT}");
            }
            Command::At { unix_secs } if *unix_secs > u64::from(u32::MAX) => {
                bail!(
                    "timestamp {unix_secs} does not fit the 32-bit id field (max = {})",
                    u32::MAX
                );
            }
            _ => {}
        }

        Ok(Self {
            json: args.json,
            command: args.command,
        })
    }
}
