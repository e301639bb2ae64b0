//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Databricks brand palette toolkit
#[derive(Parser)]
#[command(name = "brandkit", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List and resolve palette tokens
    Tokens {
        #[command(subcommand)]
        action: TokensAction,
    },
    /// Print the generated CSS custom properties
    Css {
        /// Namespace prefix for property names
        #[arg(long, default_value = brandkit_palette::css::DEFAULT_NAMESPACE)]
        prefix: String,
        /// Wrap the variables in a `:root { ... }` block
        #[arg(long)]
        root_block: bool,
    },
    /// Print chart palettes
    Charts {
        /// Palette name (primary, extended, sequential-orange, sequential-navy, diverging)
        name: Option<String>,
    },
    /// Convert a hex color to its HSL triplet
    Convert {
        /// Color in #RRGGBB form
        hex: String,
    },
}

#[derive(Subcommand)]
pub enum TokensAction {
    /// List every token with hex and HSL forms
    List,
    /// Resolve a dot-path id (e.g. corporate.innovationOrange, semantic.primary)
    Show { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tokens_show() {
        let cli = Cli::try_parse_from(["brandkit", "tokens", "show", "semantic.primary"]).unwrap();
        match cli.command {
            Command::Tokens {
                action: TokensAction::Show { path },
            } => assert_eq!(path, "semantic.primary"),
            _ => panic!("parsed into the wrong command"),
        }
    }

    #[test]
    fn test_parse_css_defaults() {
        let cli = Cli::try_parse_from(["brandkit", "css"]).unwrap();
        match cli.command {
            Command::Css { prefix, root_block } => {
                assert_eq!(prefix, "databricks");
                assert!(!root_block);
            }
            _ => panic!("parsed into the wrong command"),
        }
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::try_parse_from(["brandkit", "charts", "--output", "json"]).unwrap();
        assert!(matches!(cli.output, OutputFormat::Json));
    }
}
