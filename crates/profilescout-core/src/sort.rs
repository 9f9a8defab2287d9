// Client-side ordering of the repository table
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Repository;

/// Columns that carry an ordering function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKey {
    Name,
    Stars,
}

impl ColumnKey {
    /// Compare two repositories on this column, ascending
    ///
    /// Names compare case-insensitively, stars numerically.
    pub fn compare(self, a: &Repository, b: &Repository) -> Ordering {
        match self {
            ColumnKey::Name => compare_ignore_case(&a.name, &b.name),
            ColumnKey::Stars => a.star_count.cmp(&b.star_count),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::Name => "name",
            ColumnKey::Stars => "stars",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header marker
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: ColumnKey) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: ColumnKey) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// Ordering of two rows under this spec, without a tiebreak
    pub fn compare(&self, a: &Repository, b: &Repository) -> Ordering {
        self.direction.apply(self.column.compare(a, b))
    }

    /// Next spec when a column header is activated
    ///
    /// Same column cycles ascending -> descending -> unsorted; a different
    /// column starts over at ascending.
    pub fn toggle(current: Option<SortSpec>, column: ColumnKey) -> Option<SortSpec> {
        match current {
            Some(spec) if spec.column == column => match spec.direction {
                SortDirection::Ascending => Some(Self::descending(column)),
                SortDirection::Descending => None,
            },
            _ => Some(Self::ascending(column)),
        }
    }

    /// Parse a config value such as `"stars_desc"`, `"name"` or `"none"`
    pub fn parse_setting(value: &str) -> Result<Option<SortSpec>, String> {
        let value = value.trim().to_ascii_lowercase();
        if value.is_empty() || value == "none" {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}_{}", self.column.as_str(), dir)
    }
}

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = match s.split_once('_') {
            Some((column, direction)) => (column, direction),
            None => (s, "asc"),
        };

        let column = match column {
            "name" => ColumnKey::Name,
            "stars" => ColumnKey::Stars,
            other => return Err(format!("unknown sort column '{}'", other)),
        };

        let direction = match direction {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            other => return Err(format!("unknown sort direction '{}'", other)),
        };

        Ok(Self { column, direction })
    }
}

/// Display columns of the repository table, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Description,
    Stars,
    Actions,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Name, Column::Description, Column::Stars, Column::Actions];

    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Description => "Description",
            Column::Stars => "Stars",
            Column::Actions => "Actions",
        }
    }

    /// Description and actions are display-only
    pub fn sort_key(self) -> Option<ColumnKey> {
        match self {
            Column::Name => Some(ColumnKey::Name),
            Column::Stars => Some(ColumnKey::Stars),
            Column::Description | Column::Actions => None,
        }
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
