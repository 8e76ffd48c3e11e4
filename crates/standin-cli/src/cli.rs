use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "standin",
    about = "Standin: an in-memory stand-in backend for development",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Issue and verify gate tokens
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Synthesize records of the built-in sample shape
    Synth {
        /// Number of records to synthesize
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Seed an in-memory store with synthesized records and query it
    Demo {
        /// Number of records to seed
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum TokenCommands {
    /// Sign a token from key=value claims
    Issue {
        /// Claims as key=value (repeatable)
        #[arg(long = "claim")]
        claims: Vec<String>,

        /// Signing secret
        #[arg(long, default_value = standin_auth::DEFAULT_SECRET)]
        secret: String,

        /// Token lifetime in seconds
        #[arg(long, default_value_t = standin_auth::DEFAULT_TTL_SECONDS)]
        ttl: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify a token's signature and expiry
    Verify {
        /// The token string
        token: String,

        /// Verifying secret
        #[arg(long, default_value = standin_auth::DEFAULT_SECRET)]
        secret: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
