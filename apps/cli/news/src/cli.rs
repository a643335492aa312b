//! Command-line surface: one subcommand per page event.

use crate::error::NewsError;

use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const BASE_URL_ENV: &str = "NEWS_CLIENT_BASE_URL";
pub const PASSWORD_ENV: &str = "NEWS_CLIENT_PASSWORD";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        email: String,
        password: String,
    },
    Settings {
        preferred_category: String,
    },
    /// Page-load render; `paging` set when any of --page/--size/--sort was given.
    Articles {
        paging: Option<Paging>,
    },
    Article {
        id: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paging {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobalArgs {
    pub base_url: Option<String>,
    pub config_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub json: bool,
    pub html: bool,
    pub verbose: bool,
}

fn password_arg() -> Arg {
    Arg::new("password")
        .long("password")
        .help("Account password (prefer the env var to keep it out of shell history)")
        .env(PASSWORD_ENV)
        .hide_env_values(true)
        .required(true)
}

fn username_arg() -> Arg {
    Arg::new("username")
        .short('u')
        .long("username")
        .help("Account username")
        .required(true)
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("news")
        .about("Client for the news site: sign in, register, update settings, read articles")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("News server base URL, overrides config and .env")
                .env(BASE_URL_ENV)
                .global(true),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding config.json")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("log-dir")
                .long("log-dir")
                .help("Directory for news.log")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the page report as JSON")
                .action(ArgAction::SetTrue)
                .conflicts_with("html")
                .global(true),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .help("Print rendered lists as HTML")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show info and debug logs on the terminal")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("login")
                .about("Submit the login form")
                .arg(username_arg())
                .arg(password_arg()),
        )
        .subcommand(
            Command::new("register")
                .about("Submit the registration form")
                .arg(username_arg())
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Account email")
                        .required(true),
                )
                .arg(password_arg()),
        )
        .subcommand(
            Command::new("settings")
                .about("Submit the settings form")
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .help("Preferred news category")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("articles")
                .about("Load the news list")
                .arg(
                    Arg::new("page")
                        .long("page")
                        .help("Zero-based page number")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("size")
                        .long("size")
                        .help("Articles per page")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .help("Sort order as field,direction (repeatable)")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("article")
                .about("Show a single article")
                .arg(
                    Arg::new("id")
                        .help("Article id")
                        .required(true)
                        .value_parser(clap::value_parser!(i64)),
                ),
        )
}

#[track_caller]
fn required_string(matches: &ArgMatches, name: &str) -> Result<String, NewsError> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| NewsError::usage(format!("missing required argument: --{name}")))
}

pub fn global_args(matches: &ArgMatches) -> GlobalArgs {
    GlobalArgs {
        base_url: matches.get_one::<String>("base-url").cloned(),
        config_dir: matches.get_one::<PathBuf>("config-dir").cloned(),
        log_dir: matches.get_one::<PathBuf>("log-dir").cloned(),
        json: matches.get_flag("json"),
        html: matches.get_flag("html"),
        verbose: matches.get_flag("verbose"),
    }
}

/// Map parsed arguments onto an [`Action`].
pub fn dispatch(matches: &ArgMatches) -> Result<Action, NewsError> {
    match matches.subcommand() {
        Some(("login", sub)) => Ok(Action::Login {
            username: required_string(sub, "username")?,
            password: required_string(sub, "password")?,
        }),
        Some(("register", sub)) => Ok(Action::Register {
            username: required_string(sub, "username")?,
            email: required_string(sub, "email")?,
            password: required_string(sub, "password")?,
        }),
        Some(("settings", sub)) => Ok(Action::Settings {
            preferred_category: required_string(sub, "category")?,
        }),
        Some(("articles", sub)) => {
            let page = sub.get_one::<u32>("page").copied();
            let size = sub.get_one::<u32>("size").copied();
            let sort: Vec<String> = sub
                .get_many::<String>("sort")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();

            let paging = if page.is_none() && size.is_none() && sort.is_empty() {
                None
            } else {
                Some(Paging { page, size, sort })
            };
            Ok(Action::Articles { paging })
        }
        Some(("article", sub)) => {
            let id = sub
                .get_one::<i64>("id")
                .copied()
                .ok_or_else(|| NewsError::usage("missing required argument: <id>"))?;
            Ok(Action::Article { id })
        }
        Some((other, _)) => Err(NewsError::usage(format!("unknown command: {other}"))),
        None => Err(NewsError::usage("a command is required")),
    }
}
