//! `doctrack` console: list, export and delete records from saved API responses.

use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::Config;
use dotenvy::dotenv;

use doctrack::domain::action_officer::ActionOfficer;
use doctrack::domain::action_required::ActionRequired;
use doctrack::domain::action_required_days::ActionRequiredDays;
use doctrack::domain::action_taken::ActionTaken;
use doctrack::domain::destination::DocumentDestination;
use doctrack::domain::document::OutboxDocument;
use doctrack::domain::document_type::DocumentType;
use doctrack::domain::office::Office;
use doctrack::domain::region::Region;
use doctrack::domain::user_level::UserLevel;
use doctrack::dto::list::{ListPageData, ListQuery};
use doctrack::export::ExportFormat;
use doctrack::list_view::PageSize;
use doctrack::models::config::AppConfig;
use doctrack::repository::{JsonFileRepository, RecordReader, Table, TableRecord};
use doctrack::selection::Selection;
use doctrack::services::deletion::{DeletionRequest, confirm_deletion};
use doctrack::services::export::{ExportOptions, export_table};
use doctrack::services::list::load_list_page;
use doctrack::services::{ServiceError, ServiceResult};

#[derive(Parser)]
#[command(name = "doctrack")]
#[command(about = "Document tracking tables from saved API responses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of a table
    List {
        /// Table slug, e.g. `region` or `document_source`
        table: Table,
        /// Case-insensitive search text
        #[arg(long)]
        query: Option<String>,
        /// Page number, starting at 1
        #[arg(long)]
        page: Option<usize>,
    },
    /// Write a report of a table
    Export {
        table: Table,
        /// csv, print or word
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
        #[arg(long)]
        query: Option<String>,
    },
    /// Delete records by id
    Delete {
        table: Table,
        #[arg(required = true)]
        ids: Vec<i32>,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Runs `$run::<Record>(args..)` for the record type stored in `$table`.
macro_rules! for_table {
    ($table:expr, $run:ident($($arg:expr),* $(,)?)) => {
        match $table {
            Table::Office => $run::<Office>($($arg),*),
            Table::Region => $run::<Region>($($arg),*),
            Table::ActionOfficer => $run::<ActionOfficer>($($arg),*),
            Table::DocumentType => $run::<DocumentType>($($arg),*),
            Table::ActionRequired => $run::<ActionRequired>($($arg),*),
            Table::ActionTaken => $run::<ActionTaken>($($arg),*),
            Table::ActionRequiredDays => $run::<ActionRequiredDays>($($arg),*),
            Table::UserLevel => $run::<UserLevel>($($arg),*),
            Table::Document => $run::<OutboxDocument>($($arg),*),
            Table::Destination => $run::<DocumentDestination>($($arg),*),
        }
    };
}

fn print_page<T: TableRecord>(page: &ListPageData<T>) {
    println!("{}", page.title);
    if let Some(query) = &page.search_query {
        println!("Search: {query}");
    }
    println!("{}", page.headers.join(" | "));
    if page.records.is_empty() {
        println!("No records found");
    }
    for record in &page.records.items {
        println!("{}", record.cells().join(" | "));
    }
    println!("{}", page.records.summary);

    let links: Vec<String> = page
        .records
        .pages
        .iter()
        .map(|link| match link {
            Some(number) if *number == page.records.page => format!("[{number}]"),
            Some(number) => number.to_string(),
            None => "...".to_string(),
        })
        .collect();
    if !links.is_empty() {
        println!("Pages: {}", links.join(" "));
    }
}

fn list<T: TableRecord>(
    repo: &JsonFileRepository,
    query: ListQuery,
    page_size: PageSize,
) -> ServiceResult<()> {
    let page = load_list_page::<T, _>(repo, query, page_size)?;
    print_page(&page);
    Ok(())
}

fn export<T: TableRecord>(
    repo: &JsonFileRepository,
    format: ExportFormat,
    query: Option<&str>,
    options: &ExportOptions,
) -> ServiceResult<PathBuf> {
    export_table::<T, _>(repo, format, query, options)
}

/// Builds the request the way the list page does: a single id names its
/// record, several ids go through the selection.
fn deletion_request<T: TableRecord>(
    repo: &JsonFileRepository,
    selection: &Selection,
) -> ServiceResult<DeletionRequest> {
    let ids = selection.ids();
    if let [id] = ids.as_slice() {
        let records = repo.list_records::<T>()?;
        return records
            .iter()
            .find(|record| record.record_id() == *id)
            .map(DeletionRequest::single::<T>)
            .ok_or(ServiceError::NotFound);
    }
    Ok(DeletionRequest::selected(T::TABLE, selection))
}

fn delete(
    repo: &JsonFileRepository,
    table: Table,
    ids: Vec<i32>,
    confirmed: bool,
) -> ServiceResult<usize> {
    let mut selection = Selection::from_ids(ids);
    let request = for_table!(table, deletion_request(repo, &selection))?;

    println!("{}", request.title());
    println!("{}", request.prompt());
    match confirm_deletion(repo, &request, confirmed, &mut selection) {
        Err(ServiceError::ConfirmationRequired) => {
            println!("Re-run with --yes to confirm.");
            Ok(0)
        }
        result => result,
    }
}

fn run(command: Commands, config: &AppConfig) -> ServiceResult<()> {
    let repo = JsonFileRepository::new(&config.data_dir);

    match command {
        Commands::List { table, query, page } => {
            let mut list_query = ListQuery::new();
            list_query.search = query;
            list_query.page = page;
            for_table!(table, list(&repo, list_query, config.page_size()))
        }
        Commands::Export {
            table,
            format,
            query,
        } => {
            let options = ExportOptions {
                export_dir: config.export_dir.clone(),
                title_prefix: config.report_title_prefix.clone(),
                generated_at: chrono::Local::now().naive_local(),
            };
            let path = for_table!(table, export(&repo, format, query.as_deref(), &options))?;
            println!("Exported {format} report to {}", path.display());
            Ok(())
        }
        Commands::Delete { table, ids, yes } => {
            let removed = delete(&repo, table, ids, yes)?;
            if removed > 0 {
                println!("Deleted {removed} record(s)");
            }
            Ok(())
        }
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli.command, &app_config) {
        log::error!("Command failed: {err}");
        std::process::exit(1);
    }
}
