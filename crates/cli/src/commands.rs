use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Extract imports and globals from a rule file as JSON
    Parse {
        #[arg(long, help = "Rule source file path")]
        file: String,

        #[arg(
            long,
            help = "If specified, writes the JSON document to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Render a JSON globals document as rule source
    Render {
        #[arg(long, help = "JSON document file path")]
        file: String,

        #[arg(
            long,
            help = "If specified, writes the rule source to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Report global declarations that would be dropped or are ambiguous
    Check {
        #[arg(long, help = "Rule source file path")]
        file: String,
    },
}
