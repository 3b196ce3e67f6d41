use std::process::ExitCode;

use book_catalog::{BookService, CatalogError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors that can stop the demo walkthrough
#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Check failed: {0}")]
    CheckFailed(&'static str),

    #[error("JSON rendering error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Walks a catalog through create, get, list and delete, checking each step
fn run_demo() -> Result<String, DemoError> {
    let service = BookService::new();

    // Create two books
    let gatsby = service.create_book("The Great Gatsby", "F. Scott Fitzgerald")?;
    let mockingbird = service.create_book("To Kill a Mockingbird", "Harper Lee")?;

    // Get the first book back
    let retrieved = service.get_book(gatsby.id())?;
    if retrieved != gatsby {
        return Err(DemoError::CheckFailed("retrieved book does not match"));
    }

    let all = service.list_books(None, None, true)?;
    tracing::info!(count = all.len(), "Catalog listed");

    service.delete_book(gatsby.id())?;

    match service.get_book(gatsby.id()) {
        Err(CatalogError::NotFound(_)) => {}
        Ok(_) => return Err(DemoError::CheckFailed("deleted book is still retrievable")),
        Err(e) => return Err(e.into()),
    }

    let remaining = service.list_books(None, None, true)?;
    if remaining != vec![mockingbird] {
        return Err(DemoError::CheckFailed("unexpected books after delete"));
    }

    Ok(serde_json::to_string_pretty(&remaining)?)
}

fn main() -> ExitCode {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run_demo() {
        Ok(json) => {
            println!("{}", json);
            tracing::info!("Demo completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Demo failed");
            ExitCode::FAILURE
        }
    }
}
