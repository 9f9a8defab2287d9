// Accumulated repositories plus the paging cursor that feeds them
use std::collections::HashSet;

use crate::models::Repository;
use crate::sort::SortSpec;

#[derive(Debug, Clone)]
struct Entry {
    /// Position in fetch order, the tiebreak for every sort
    seq: u64,
    repo: Repository,
}

/// Ordered, url-unique set of fetched repositories
#[derive(Debug, Clone, Default)]
pub struct RepositoryCollection {
    entries: Vec<Entry>,
    urls: HashSet<String>,
    next_seq: u64,
}

/// Result of merging one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    pub added: usize,
    pub duplicates: usize,
}

impl RepositoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append repositories not already present, judged by `url`
    ///
    /// New rows land at the end; re-sort afterwards if a sort is active.
    pub fn merge(&mut self, repos: Vec<Repository>) -> MergeStats {
        let mut stats = MergeStats::default();

        for repo in repos {
            if !self.urls.insert(repo.url.clone()) {
                stats.duplicates += 1;
                continue;
            }

            self.entries.push(Entry {
                seq: self.next_seq,
                repo,
            });
            self.next_seq += 1;
            stats.added += 1;
        }

        stats
    }

    /// Stable re-order; `None` puts rows back in fetch order
    pub fn sort(&mut self, spec: Option<SortSpec>) {
        match spec {
            Some(spec) => self
                .entries
                .sort_by(|a, b| spec.compare(&a.repo, &b.repo).then(a.seq.cmp(&b.seq))),
            None => self.entries.sort_by_key(|e| e.seq),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Repository> + '_ {
        self.entries.iter().map(|e| &e.repo)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.urls.clear();
        self.next_seq = 0;
    }
}

/// Where the next repository page starts
///
/// Exhaustion latches: once a page comes back short, nothing more is
/// requested until the cursor is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchCursor {
    per_page: u32,
    next_page: u32,
    last_requested: Option<u32>,
    exhausted: bool,
}

impl FetchCursor {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page: per_page.max(1),
            next_page: 1,
            last_requested: None,
            exhausted: false,
        }
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub(crate) fn mark_requested(&mut self) {
        self.last_requested = Some(self.per_page);
    }

    /// Advance past a page that came back with `received` items
    pub(crate) fn record(&mut self, received: usize) {
        let requested = self.last_requested.unwrap_or(self.per_page) as usize;
        if received < requested {
            self.exhausted = true;
        }
        self.next_page += 1;
    }
}
