use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "wiki",
    version,
    about = "Fetch Wikipedia article excerpts",
    long_about = "wiki - Fetch the lead section of a Wikipedia (or any MediaWiki) article.",
    after_help = "EXAMPLES:\n  wiki rust programming language\n  wiki -l sv Stockholm\n  wiki --short Berlin\n  wiki -s -w 72 Tokio\n  wiki -u https://wiki.example.org/w/api.php --no-check-certificate Home\n  wiki Taylor Swift --json\n\nENVIRONMENT:\n  WIKI_LANG  default language (en)\n  WIKI_URL   default API url, %s is replaced by the language"
)]
pub struct Cli {
    /// Article title to look up
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Language code
    #[arg(short = 'l', long, env = "WIKI_LANG")]
    pub lang: Option<String>,

    /// API url; %s is replaced by the language
    #[arg(short = 'u', long, env = "WIKI_URL")]
    pub url: Option<String>,

    /// Do not colorize output
    #[arg(short = 'n', long, action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Print the excerpt only
    #[arg(short = 's', long, action = ArgAction::SetTrue)]
    pub simple: bool,

    /// Print the first sentence only
    #[arg(long, action = ArgAction::SetTrue)]
    pub short: bool,

    /// Wrap text at this width, 0 disables wrapping
    #[arg(short = 'w', long, default_value_t = 0)]
    pub wrap: usize,

    /// Skip TLS certificate verification
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_check_certificate: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Output as JSON
    #[arg(short = 'j', long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Debug output to stderr
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}
