// Repository list controller: paged fetching, sorting and paging in one place
use std::num::NonZeroUsize;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::collection::{FetchCursor, MergeStats, RepositoryCollection};
use crate::error::PageFetchError;
use crate::models::{Account, Repository};
use crate::pagination::{PageWindow, PaginationSummary, DEFAULT_PAGE_SIZE};
use crate::sort::{Column, ColumnKey, SortDirection, SortSpec};

/// GitHub's own default, and what the web page used to ask for
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Anything that can hand out one page of an account's repositories
///
/// Pages are 1-based. An empty or short page means there is nothing after it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(
        &self,
        handle: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, PageFetchError>;
}

/// Lifecycle of the list
///
/// One tag instead of loading/error/done flags, so "fetching while
/// exhausted" can't be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Idle,
    Fetching,
    HasData,
    Exhausted,
    Failed(PageFetchError),
}

impl ListState {
    pub fn is_fetching(&self) -> bool {
        matches!(self, ListState::Fetching)
    }
}

/// A page request issued by the controller, waiting to be executed
///
/// Carries the session it belongs to so late answers for an older account
/// can be told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub session: u64,
    pub handle: String,
    pub page: u32,
    pub per_page: u32,
}

/// A ticket together with what came back for it
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub ticket: FetchTicket,
    pub result: Result<Vec<Repository>, PageFetchError>,
}

impl FetchTicket {
    /// Run this ticket against a source
    pub async fn execute(self, source: &dyn PageSource) -> PageResponse {
        let result = source.fetch_page(&self.handle, self.page, self.per_page).await;
        PageResponse {
            ticket: self,
            result,
        }
    }
}

/// What applying a page response did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Merged {
        added: usize,
        duplicates: usize,
        exhausted: bool,
    },
    Failed(PageFetchError),
    /// Answer to a request nobody is waiting for any more
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Items requested per remote page
    pub per_page: u32,
    pub default_page_size: NonZeroUsize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Owns the repository collection of one account and the view over it
///
/// Every operation is a synchronous state transition. Operations that need
/// the network return a [`FetchTicket`]; the caller executes it wherever it
/// likes and feeds the [`PageResponse`] back through [`apply_page`].
///
/// [`apply_page`]: RepositoryList::apply_page
#[derive(Debug)]
pub struct RepositoryList {
    options: ListOptions,
    account: Option<Account>,
    session: u64,
    pending: Option<FetchTicket>,
    state: ListState,
    collection: RepositoryCollection,
    cursor: FetchCursor,
    sort: Option<SortSpec>,
    window: PageWindow,
}

impl RepositoryList {
    pub fn new(options: ListOptions) -> Self {
        Self {
            options,
            account: None,
            session: 0,
            pending: None,
            state: ListState::Idle,
            collection: RepositoryCollection::new(),
            cursor: FetchCursor::new(options.per_page),
            sort: None,
            window: PageWindow::new(options.default_page_size),
        }
    }

    /// Start over for `account` and issue the request for its first page
    pub fn reset(&mut self, account: Account) -> FetchTicket {
        self.clear();
        info!("Loading repositories for {}", account.login);
        self.account = Some(account);
        self.begin_fetch()
    }

    /// Drop the account and everything fetched for it
    ///
    /// Responses still in flight become stale.
    pub fn clear(&mut self) {
        self.session += 1;
        self.account = None;
        self.pending = None;
        self.collection.clear();
        self.cursor = FetchCursor::new(self.options.per_page);
        self.sort = None;
        self.window = PageWindow::new(self.options.default_page_size);
        self.state = ListState::Idle;
    }

    /// Ask for the next page
    ///
    /// `None` while a fetch is in flight, before anything was loaded, and
    /// once the source ran dry. After a failure this retries the same page.
    pub fn request_more(&mut self) -> Option<FetchTicket> {
        match self.state {
            ListState::HasData | ListState::Failed(_) if !self.cursor.is_exhausted() => {
                Some(self.begin_fetch())
            }
            _ => None,
        }
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        let handle = self
            .account
            .as_ref()
            .map(|a| a.repository_page_handle.clone())
            .unwrap_or_default();

        self.cursor.mark_requested();
        let ticket = FetchTicket {
            session: self.session,
            handle,
            page: self.cursor.next_page(),
            per_page: self.cursor.per_page(),
        };

        debug!("Requesting page {} (session {})", ticket.page, ticket.session);
        self.state = ListState::Fetching;
        self.pending = Some(ticket.clone());
        ticket
    }

    /// Fold a page response into the list
    pub fn apply_page(&mut self, response: PageResponse) -> PageOutcome {
        if self.pending.as_ref() != Some(&response.ticket) {
            debug!(
                "Discarding stale page {} (session {}, current {})",
                response.ticket.page, response.ticket.session, self.session
            );
            return PageOutcome::Stale;
        }
        self.pending = None;

        match response.result {
            Ok(repos) => {
                let received = repos.len();
                let MergeStats { added, duplicates } = self.collection.merge(repos);
                self.cursor.record(received);

                if duplicates > 0 {
                    warn!("Dropped {} repositories already in the list", duplicates);
                }

                self.collection.sort(self.sort);
                self.window.clamp(self.collection.len());

                let exhausted = self.cursor.is_exhausted();
                self.state = if exhausted {
                    ListState::Exhausted
                } else {
                    ListState::HasData
                };

                debug!(
                    "Merged page {}: {} new, {} total, exhausted={}",
                    response.ticket.page,
                    added,
                    self.collection.len(),
                    exhausted
                );

                PageOutcome::Merged {
                    added,
                    duplicates,
                    exhausted,
                }
            }
            Err(err) => {
                warn!("Page {} failed: {}", response.ticket.page, err);
                self.state = ListState::Failed(err.clone());
                PageOutcome::Failed(err)
            }
        }
    }

    /// Re-order everything and jump back to the first page
    pub fn set_sort(&mut self, spec: Option<SortSpec>) {
        self.sort = spec;
        self.collection.sort(spec);
        self.window.first();
    }

    /// Header click: cycle the sort of `column`
    pub fn toggle_sort(&mut self, column: ColumnKey) {
        self.set_sort(SortSpec::toggle(self.sort, column));
    }

    pub fn set_page_size(&mut self, size: NonZeroUsize) {
        self.window.resize(size, self.collection.len());
    }

    /// Jump to `index`, clamped into the valid page range
    pub fn goto_page(&mut self, index: isize) {
        self.window.goto(index, self.collection.len());
    }

    pub fn next_page(&mut self) -> bool {
        if !self.pagination().can_next_page {
            return false;
        }
        self.goto_page(self.window.index() as isize + 1);
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.pagination().can_previous_page {
            return false;
        }
        self.goto_page(self.window.index() as isize - 1);
        true
    }

    pub fn last_page(&mut self) {
        self.goto_page(isize::MAX);
    }

    /// Rows of the current page, in sorted order
    pub fn visible_rows(&self) -> Vec<&Repository> {
        let range = self.window.range(self.collection.len());
        self.collection
            .iter()
            .skip(range.start)
            .take(range.len())
            .collect()
    }

    pub fn pagination(&self) -> PaginationSummary {
        self.window.summary(self.collection.len())
    }

    /// Direction marker for a display column, if it is the sorted one
    pub fn sort_indicator(&self, column: Column) -> Option<SortDirection> {
        let key = column.sort_key()?;
        self.sort
            .filter(|spec| spec.column == key)
            .map(|spec| spec.direction)
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.window.size()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// More pages may exist and nothing is in flight
    pub fn can_request_more(&self) -> bool {
        matches!(self.state, ListState::HasData | ListState::Failed(_))
            && !self.cursor.is_exhausted()
    }

    /// All rows in sorted order
    pub fn rows(&self) -> impl Iterator<Item = &Repository> + '_ {
        self.collection.iter()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Keep fetching until the source runs dry
    ///
    /// Stops at the first failed page and reports it; pages merged before the
    /// failure stay in the list.
    pub async fn load_remaining(
        &mut self,
        source: &dyn PageSource,
        first: FetchTicket,
    ) -> Result<(), PageFetchError> {
        let mut ticket = Some(first);

        while let Some(next) = ticket {
            let response = next.execute(source).await;
            if let PageOutcome::Failed(err) = self.apply_page(response) {
                return Err(err);
            }
            ticket = self.request_more();
        }

        Ok(())
    }
}

impl Default for RepositoryList {
    fn default() -> Self {
        Self::new(ListOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn account(login: &str) -> Account {
        Account {
            id: 7,
            login: login.to_string(),
            name: None,
            avatar_url: String::new(),
            profile_url: format!("https://github.com/{}", login),
            bio: None,
            public_repo_count: 0,
            following_count: 0,
            follower_count: 0,
            created_at: None,
            repository_page_handle: format!("https://api.github.com/users/{}/repos", login),
        }
    }

    fn repo(name: &str, stars: u32) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            star_count: stars,
            url: format!("https://github.com/someone/{}", name),
            language: None,
        }
    }

    fn list(per_page: u32, page_size: usize) -> RepositoryList {
        RepositoryList::new(ListOptions {
            per_page,
            default_page_size: NonZeroUsize::new(page_size).unwrap(),
        })
    }

    fn ok(ticket: FetchTicket, repos: Vec<Repository>) -> PageResponse {
        PageResponse {
            ticket,
            result: Ok(repos),
        }
    }

    fn stars(rows: Vec<&Repository>) -> Vec<u32> {
        rows.into_iter().map(|r| r.star_count).collect()
    }

    fn names(rows: Vec<&Repository>) -> Vec<&str> {
        rows.into_iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_new_list_is_idle_and_cannot_fetch() {
        let mut list = RepositoryList::default();
        assert_eq!(list.state(), &ListState::Idle);
        assert!(list.request_more().is_none());
        assert!(list.visible_rows().is_empty());
    }

    #[test]
    fn test_reset_starts_fetching_first_page() {
        let mut list = list(3, 5);
        let ticket = list.reset(account("octocat"));

        assert_eq!(list.state(), &ListState::Fetching);
        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.per_page, 3);
        assert_eq!(ticket.handle, "https://api.github.com/users/octocat/repos");
        assert_eq!(list.account().map(|a| a.login.as_str()), Some("octocat"));
    }

    #[test]
    fn test_request_more_while_fetching_is_coalesced() {
        let mut list = list(3, 5);
        let ticket = list.reset(account("octocat"));

        assert!(list.request_more().is_none());
        assert!(list.request_more().is_none());
        assert_eq!(list.state(), &ListState::Fetching);

        list.apply_page(ok(ticket, vec![repo("a", 1), repo("b", 2), repo("c", 3)]));
        assert_eq!(list.state(), &ListState::HasData);
    }

    #[test]
    fn test_full_page_then_short_page_exhausts() {
        let mut list = list(2, 5);
        let first = list.reset(account("octocat"));
        let outcome = list.apply_page(ok(first, vec![repo("a", 1), repo("b", 2)]));
        assert_eq!(
            outcome,
            PageOutcome::Merged {
                added: 2,
                duplicates: 0,
                exhausted: false
            }
        );

        let second = list.request_more().unwrap();
        assert_eq!(second.page, 2);
        list.apply_page(ok(second, vec![repo("c", 3)]));

        assert_eq!(list.state(), &ListState::Exhausted);
        assert!(list.request_more().is_none());
        assert!(list.request_more().is_none());
        assert_eq!(list.state(), &ListState::Exhausted);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_empty_page_exhausts() {
        let mut list = list(2, 5);
        let first = list.reset(account("octocat"));
        list.apply_page(ok(first, vec![repo("a", 1), repo("b", 2)]));

        let second = list.request_more().unwrap();
        list.apply_page(ok(second, Vec::new()));

        assert_eq!(list.state(), &ListState::Exhausted);
        assert!(list.request_more().is_none());
    }

    #[test]
    fn test_overlapping_pages_never_duplicate_urls() {
        let mut list = list(3, 20);
        let first = list.reset(account("octocat"));
        list.apply_page(ok(first, vec![repo("a", 1), repo("b", 2), repo("c", 3)]));

        let second = list.request_more().unwrap();
        let outcome = list.apply_page(ok(second, vec![repo("c", 3), repo("d", 4), repo("a", 1)]));
        assert_eq!(
            outcome,
            PageOutcome::Merged {
                added: 1,
                duplicates: 2,
                exhausted: false
            }
        );

        let mut urls: Vec<&str> = list.rows().map(|r| r.url.as_str()).collect();
        let total = urls.len();
        urls.sort_unstable();
        urls.dedup();
        assert_eq!(urls.len(), total);
        assert_eq!(total, 4);
    }

    #[test]
    fn test_failed_page_keeps_data_and_retries_same_page() {
        let mut list = list(2, 5);
        let first = list.reset(account("octocat"));
        list.apply_page(ok(first, vec![repo("a", 1), repo("b", 2)]));

        let second = list.request_more().unwrap();
        let outcome = list.apply_page(PageResponse {
            ticket: second.clone(),
            result: Err(PageFetchError::Transport("connection reset".to_string())),
        });

        assert!(matches!(outcome, PageOutcome::Failed(_)));
        assert!(matches!(list.state(), ListState::Failed(_)));
        assert_eq!(list.len(), 2);

        let retry = list.request_more().unwrap();
        assert_eq!(retry.page, second.page);
        assert_eq!(list.state(), &ListState::Fetching);
    }

    #[test]
    fn test_stale_response_after_reset_is_discarded() {
        let mut list = list(2, 5);
        let old = list.reset(account("octocat"));
        let new = list.reset(account("torvalds"));
        assert_ne!(old.session, new.session);

        let outcome = list.apply_page(ok(old, vec![repo("spoon-knife", 12)]));
        assert_eq!(outcome, PageOutcome::Stale);
        assert!(list.is_empty());
        assert_eq!(list.state(), &ListState::Fetching);

        list.apply_page(ok(new, vec![repo("linux", 180_000)]));
        assert_eq!(names(list.visible_rows()), vec!["linux"]);
    }

    #[test]
    fn test_duplicate_delivery_of_same_response_is_stale() {
        let mut list = list(2, 5);
        let first = list.reset(account("octocat"));
        list.apply_page(ok(first.clone(), vec![repo("a", 1), repo("b", 2)]));
        let outcome = list.apply_page(ok(first, vec![repo("z", 1), repo("y", 2)]));
        assert_eq!(outcome, PageOutcome::Stale);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_clear_makes_in_flight_page_stale() {
        let mut list = list(2, 5);
        let ticket = list.reset(account("octocat"));
        list.clear();

        assert_eq!(list.apply_page(ok(ticket, vec![repo("a", 1)])), PageOutcome::Stale);
        assert_eq!(list.state(), &ListState::Idle);
        assert!(list.account().is_none());
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut list = list(10, 5);
        let ticket = list.reset(account("octocat"));
        list.apply_page(ok(ticket, vec![repo("Zeta", 0), repo("alpha", 0), repo("Beta", 0)]));

        list.set_sort(Some(SortSpec::ascending(ColumnKey::Name)));
        assert_eq!(names(list.visible_rows()), vec!["alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn test_names_equal_but_for_case_keep_fetch_order() {
        let mut list = list(10, 5);
        let ticket = list.reset(account("octocat"));
        list.apply_page(ok(
            ticket,
            vec![repo("readme", 3), repo("README", 1), repo("Readme", 2)],
        ));

        list.set_sort(Some(SortSpec::descending(ColumnKey::Name)));
        assert_eq!(names(list.visible_rows()), vec!["readme", "README", "Readme"]);

        list.set_sort(Some(SortSpec::ascending(ColumnKey::Name)));
        assert_eq!(names(list.visible_rows()), vec!["readme", "README", "Readme"]);
    }

    #[test]
    fn test_sort_is_a_function_of_spec_not_history() {
        let mut list = list(10, 20);
        let ticket = list.reset(account("octocat"));
        list.apply_page(ok(
            ticket,
            vec![repo("a", 3), repo("b", 3), repo("c", 1), repo("d", 8), repo("e", 1)],
        ));

        list.set_sort(Some(SortSpec::ascending(ColumnKey::Stars)));
        let once: Vec<String> = list.rows().map(|r| r.name.clone()).collect();

        list.set_sort(Some(SortSpec::descending(ColumnKey::Stars)));
        list.set_sort(Some(SortSpec::ascending(ColumnKey::Stars)));
        list.set_sort(Some(SortSpec::descending(ColumnKey::Stars)));
        list.set_sort(Some(SortSpec::ascending(ColumnKey::Stars)));
        let twice: Vec<String> = list.rows().map(|r| r.name.clone()).collect();

        assert_eq!(once, twice);
        assert_eq!(once, vec!["c", "e", "a", "b", "d"]);
    }

    #[test]
    fn test_set_sort_resets_index_but_not_size() {
        let mut list = list(10, 2);
        let ticket = list.reset(account("octocat"));
        list.apply_page(ok(ticket, vec![repo("a", 1), repo("b", 2), repo("c", 3), repo("d", 4)]));

        list.goto_page(1);
        list.set_sort(Some(SortSpec::descending(ColumnKey::Stars)));

        assert_eq!(list.pagination().index, 0);
        assert_eq!(list.page_size().get(), 2);
    }

    #[test]
    fn test_new_pages_are_merged_into_current_sort() {
        let mut list = list(2, 10);
        let first = list.reset(account("octocat"));
        list.set_sort(Some(SortSpec::descending(ColumnKey::Stars)));
        list.apply_page(ok(first, vec![repo("a", 5), repo("b", 50)]));

        let second = list.request_more().unwrap();
        list.apply_page(ok(second, vec![repo("c", 500)]));

        assert_eq!(stars(list.visible_rows()), vec![500, 50, 5]);
    }

    #[test]
    fn test_reset_clears_sort_and_window() {
        let mut list = list(10, 5);
        let ticket = list.reset(account("octocat"));
        list.apply_page(ok(ticket, (0..12).map(|i| repo(&format!("r{}", i), i)).collect()));
        list.set_sort(Some(SortSpec::ascending(ColumnKey::Name)));
        list.set_page_size(NonZeroUsize::new(10).unwrap());
        list.goto_page(1);

        list.reset(account("torvalds"));
        assert_eq!(list.sort(), None);
        assert_eq!(list.pagination().index, 0);
        assert_eq!(list.page_size().get(), 5);
        assert!(list.is_empty());
    }

    #[test]
    fn test_goto_page_is_always_clamped() {
        let mut list = list(20, 5);
        let ticket = list.reset(account("octocat"));
        list.apply_page(ok(ticket, (0..12).map(|i| repo(&format!("r{}", i), i)).collect()));

        for requested in [-5, 0, 1, 2, 3, 99] {
            list.goto_page(requested);
            let summary = list.pagination();
            assert!(summary.index <= summary.page_count - 1);
        }

        list.goto_page(99);
        assert_eq!(list.pagination().index, 2);

        list.set_page_size(NonZeroUsize::new(10).unwrap());
        assert_eq!(list.pagination().page_count, 2);
        assert_eq!(list.pagination().index, 1);
    }

    #[test]
    fn test_next_and_previous_respect_bounds() {
        let mut list = list(20, 5);
        let ticket = list.reset(account("octocat"));
        list.apply_page(ok(ticket, (0..7).map(|i| repo(&format!("r{}", i), i)).collect()));

        assert!(!list.previous_page());
        assert!(list.next_page());
        assert!(!list.next_page());
        assert_eq!(list.pagination().index, 1);
        assert!(list.previous_page());
        list.last_page();
        assert_eq!(list.pagination().index, 1);
    }

    #[test]
    fn test_sort_indicator_only_on_sorted_column() {
        let mut list = list(10, 5);
        list.toggle_sort(ColumnKey::Stars);
        assert_eq!(list.sort_indicator(Column::Stars), Some(SortDirection::Ascending));
        assert_eq!(list.sort_indicator(Column::Name), None);
        assert_eq!(list.sort_indicator(Column::Description), None);

        list.toggle_sort(ColumnKey::Stars);
        assert_eq!(list.sort_indicator(Column::Stars), Some(SortDirection::Descending));

        list.toggle_sort(ColumnKey::Stars);
        assert_eq!(list.sort_indicator(Column::Stars), None);
    }

    #[test]
    fn test_star_ranking_across_two_pages() {
        let mut list = list(100, 5);
        let ticket = list.reset(account("octocat"));
        let repos = [3, 50, 1200, 0, 7, 999, 15]
            .iter()
            .enumerate()
            .map(|(i, &s)| repo(&format!("repo-{}", i), s))
            .collect();
        list.apply_page(ok(ticket, repos));
        assert_eq!(list.state(), &ListState::Exhausted);

        list.set_sort(Some(SortSpec::descending(ColumnKey::Stars)));
        assert_eq!(stars(list.visible_rows()), vec![1200, 999, 50, 15, 7]);

        list.goto_page(1);
        assert_eq!(stars(list.visible_rows()), vec![3, 0]);
    }

    #[tokio::test]
    async fn test_execute_passes_ticket_to_source() {
        let mut source = MockPageSource::new();
        source
            .expect_fetch_page()
            .with(
                eq("https://api.github.com/users/octocat/repos"),
                eq(1),
                eq(2),
            )
            .times(1)
            .returning(|_, _, _| Ok(vec![repo("a", 1)]));

        let mut list = list(2, 5);
        let ticket = list.reset(account("octocat"));
        let response = ticket.execute(&source).await;
        list.apply_page(response);

        assert_eq!(list.state(), &ListState::Exhausted);
        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn test_load_remaining_walks_every_page() {
        let mut source = MockPageSource::new();
        source
            .expect_fetch_page()
            .returning(|_, page, _| match page {
                1 => Ok(vec![repo("a", 1), repo("b", 2)]),
                2 => Ok(vec![repo("c", 3), repo("d", 4)]),
                _ => Ok(vec![repo("e", 5)]),
            })
            .times(3);

        let mut list = list(2, 5);
        let first = list.reset(account("octocat"));
        list.load_remaining(&source, first).await.unwrap();

        assert_eq!(list.len(), 5);
        assert_eq!(list.state(), &ListState::Exhausted);
    }

    #[tokio::test]
    async fn test_load_remaining_stops_at_failure() {
        let mut source = MockPageSource::new();
        source
            .expect_fetch_page()
            .returning(|_, page, _| match page {
                1 => Ok(vec![repo("a", 1), repo("b", 2)]),
                _ => Err(PageFetchError::RateLimited),
            })
            .times(2);

        let mut list = list(2, 5);
        let first = list.reset(account("octocat"));
        let result = list.load_remaining(&source, first).await;

        assert_eq!(result, Err(PageFetchError::RateLimited));
        assert_eq!(list.len(), 2);
        assert!(list.can_request_more());
    }
}
