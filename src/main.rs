use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use gh_members::{
    get_configuration, render::render, render::OutputFormat, Configuration, FetchError,
    GitHubMemberApi, HardcodedMemberSource, MemberListContainer, MemberSource, Overrides,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Source {
    /// Ask the GitHub API
    #[default]
    Github,
    /// Two fixed members, no network involved
    Hardcoded,
}

/// List the members of a GitHub organization
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The organization whose members to list
    #[arg(long)]
    org: Option<String>,

    /// A TOML configuration file (defaults to ./gh-members.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the GitHub API
    #[arg(long)]
    base_url: Option<String>,

    /// Where the members come from
    #[arg(long, value_enum, default_value_t = Source::Github)]
    source: Source,

    /// How to print the list
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let configuration = match get_configuration(
        args.config,
        Overrides {
            organization: args.org,
            base_url: args.base_url,
        },
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e.to_string().bold().red());
            std::process::exit(1);
        }
    };

    let source: Box<dyn MemberSource> = match args.source {
        Source::Github => Box::new(github_source(&configuration)),
        Source::Hardcoded => Box::new(HardcodedMemberSource),
    };

    let mut container = MemberListContainer::new(source);
    match container.on_mount() {
        Ok(count) => eprintln!("{} {}", "Success! I found:".green(), count),
        Err(e) => {
            eprintln!(
                "{}: {}",
                "I couldn't fetch the organization members".red(),
                e.to_string().bold()
            );
            if let FetchError::Status {
                message: Some(message),
                ..
            } = &e
            {
                eprintln!("{} {}", "GitHub said:".yellow(), message.white());
            }
            std::process::exit(1);
        }
    }

    match render(&container.member_list_vm(), args.format) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{}", e.to_string().bold().red());
            std::process::exit(1);
        }
    }
}

fn github_source(configuration: &Configuration) -> GitHubMemberApi {
    eprintln!(
        "{} {}",
        "I'm going to fetch the members of".yellow(),
        configuration.organization.white()
    );
    if configuration.token.is_some() {
        eprintln!("{}", "I have a token, requests will be authenticated".green());
    }
    GitHubMemberApi::new(configuration)
}
