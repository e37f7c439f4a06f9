//! Exports one page of a booking list as CSV.
//!
//! Usage: `booking_list [page=N] [size=N] [customer=..] [service=..]
//! [origin=..] [destination=..] [date=YYYY-MM-DD]`

use std::env;
use std::io;

use dotenvy::dotenv;

use freight_desk::domain::filter::FilterState;
use freight_desk::domain::types::{EndpointPath, PageSize};
use freight_desk::export::{resolve_columns, write_rows};
use freight_desk::forms::filter::FilterForm;
use freight_desk::models::config::ClientConfig;
use freight_desk::repository::http::HttpRepository;
use freight_desk::services::list_screen::ListScreen;

/// Splits `page=` and `size=` off the filter arguments.
fn split_paging_args(args: Vec<String>) -> (Option<String>, Option<String>, Vec<String>) {
    let mut page = None;
    let mut size = None;
    let mut filters = Vec::new();
    for arg in args {
        if let Some(value) = arg.strip_prefix("page=") {
            page = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("size=") {
            size = Some(value.to_string());
        } else {
            filters.push(arg);
        }
    }
    (page, size, filters)
}

fn parse_number(name: &str, raw: Option<String>, default: usize) -> usize {
    match raw.map(|value| value.trim().parse::<usize>()) {
        None => default,
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            log::error!("Invalid {name}: {err}");
            std::process::exit(2);
        }
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match ClientConfig::load("config") {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let (page, size, filter_args) = split_paging_args(env::args().skip(1).collect());
    let page = parse_number("page", page, 1).max(1);
    let page_size = match PageSize::new(parse_number("size", size, config.page_size)) {
        Ok(page_size) => page_size,
        Err(err) => {
            log::error!("Invalid page size: {err}");
            std::process::exit(2);
        }
    };

    let filters = match FilterForm::from_pairs(&filter_args).and_then(FilterState::try_from) {
        Ok(filters) => filters,
        Err(err) => {
            log::error!("Invalid filters: {err}");
            std::process::exit(2);
        }
    };

    let endpoint = match EndpointPath::new(config.filter_endpoint.as_str()) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            log::error!("Invalid filter endpoint: {err}");
            std::process::exit(1);
        }
    };

    let repo = match HttpRepository::new(&config) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Error building http client: {err}");
            std::process::exit(1);
        }
    };

    let mut screen = ListScreen::new(endpoint, config.scope(), page_size);
    let mut data = screen.apply_filters(&repo, filters);
    if page > 1 {
        data = screen.set_page(&repo, page - 1);
    }

    let columns = resolve_columns(&config.columns, &data.rows);
    if let Err(err) = write_rows(io::stdout().lock(), &columns, &data.rows) {
        log::error!("Error writing rows: {err}");
        std::process::exit(1);
    }

    eprintln!(
        "{} (page {} of {})",
        data.pagination.range_text(),
        data.pagination.current_page(),
        data.pagination.total_pages()
    );
}
