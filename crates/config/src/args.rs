use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.local)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,

    /// Parse the input as this message type instead of detecting it from the transaction
    #[arg(short, long)]
    pub message_type: Option<String>,

    /// Input is wrapped in a response envelope (`responseData` holds the result)
    #[arg(long)]
    pub envelope: bool,

    /// JSON file holding the transaction result. Reads stdin when omitted.
    pub input: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
