use clap::Parser;

const EXAMPLES: &str = r#"
EXAMPLES:

  Convert a pwdLastSet value to UTC:
     ad_timestamp 132539328000000000

  Same value in the local timezone:
     ad_timestamp -l 132539328000000000

  Machine-readable output:
     ad_timestamp --json 132539328000000000
"#;

#[derive(Parser, Debug)]
#[command(name = "ad_timestamp")]
#[command(version)]
#[command(about = "Convert AD timestamp to datetime.")]
#[command(after_help = EXAMPLES)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// The timestamp to convert (100-ns intervals since 1601-01-01 UTC)
    pub timestamp: i128,

    /// Convert to local time zone.
    #[arg(short, long)]
    pub local: bool,

    /// Print a JSON object instead of the bare ISO-8601 string
    #[arg(short, long)]
    pub json: bool,
}
