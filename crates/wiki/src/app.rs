use thiserror::Error;
use wiki::{request, Client, ErrorKind, WikiError};

use crate::{
    cli::Cli,
    config::{self, FileConfig, Settings},
    display::{self, ItemResponse, Style},
};

pub const EXIT_USAGE: u8 = 1;
pub const EXIT_NO_SUCH_PAGE: u8 = 2;
pub const EXIT_REQUEST: u8 = 3;
pub const EXIT_PARSE: u8 = 4;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),
    #[error("No such page")]
    NotFound { url: String },
    #[error(transparent)]
    Wiki(#[from] WikiError),
    #[error("failed to write output: {0}")]
    Output(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLanguage(_) => "INVALID_LANGUAGE",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Wiki(err) => err.code(),
            Self::Output(_) => "SERIALIZE",
        }
    }

    pub fn exit_status(&self) -> u8 {
        match self {
            Self::InvalidLanguage(_) | Self::Output(_) => EXIT_USAGE,
            Self::NotFound { .. } => EXIT_NO_SUCH_PAGE,
            Self::Wiki(err) => match err.kind() {
                ErrorKind::RequestConstruction | ErrorKind::RequestExecution => EXIT_REQUEST,
                ErrorKind::Parsing => EXIT_PARSE,
            },
        }
    }
}

pub fn run(cli: &Cli) -> Result<(), AppError> {
    let file = config::load_config().unwrap_or_else(|err| {
        log::warn!("{err:#}; using defaults");
        FileConfig::default()
    });
    let settings = Settings::resolve(cli, file);
    if !config::validate_lang(&settings.lang) {
        return Err(AppError::InvalidLanguage(settings.lang));
    }

    let query = cli.query_text();
    log::debug!(
        "looking up '{query}' lang='{}' api='{}'",
        settings.lang,
        settings.url
    );

    let url = request::build(&settings.url, &query, &settings.lang)?;
    let page = Client::new(&settings.client)?.page(&url)?;

    if page.content.is_empty() {
        return Err(AppError::NotFound { url: page.url });
    }

    if cli.json {
        display::print_json(&ItemResponse {
            ok: true,
            item: &page,
        })
        .map_err(|err| AppError::Output(err.to_string()))?;
        return Ok(());
    }

    let style = Style::from_flags(cli.simple, cli.short, cli.no_color);
    let mut text = display::render(&page, style);
    if cli.wrap > 0 {
        text = display::wrap(&text, cli.wrap);
    }
    print!("{text}");

    Ok(())
}
