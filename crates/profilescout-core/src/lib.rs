// Core logic lives here: account lookup and the repository list controller
pub mod collection;
pub mod config;
pub mod error;
pub mod format;
pub mod handle;
pub mod models;
pub mod pagination;
pub mod providers;
pub mod repo_list;
pub mod resolver;
pub mod sort;

pub use config::Config;
pub use error::{Error, InputValidationError, PageFetchError, ResolutionError};
pub use format::format_count;
pub use handle::Handle;
pub use models::{Account, Repository};
pub use pagination::{PaginationSummary, PAGE_SIZE_CHOICES};
pub use repo_list::{
    FetchTicket, ListOptions, ListState, PageOutcome, PageResponse, PageSource, RepositoryList,
};
pub use resolver::{AccountResolver, AccountSource};
pub use sort::{Column, ColumnKey, SortDirection, SortSpec};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
