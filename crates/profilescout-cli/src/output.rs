// Plain-text and JSON rendering for `show`
use profilescout_core::{format_count, Account, Column, Repository, RepositoryList};
use serde_json::{json, Value};

const DESCRIPTION_WIDTH: usize = 60;

/// Cut `text` to `max` characters, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

pub fn render_profile(account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} (@{})\n", account.display_name(), account.login));
    output.push_str(&format!("{}\n", account.profile_url));
    if let Some(bio) = &account.bio {
        output.push_str(&format!("{}\n", bio));
    }
    output.push_str(&format!(
        "{} Repositories  {} Following  {} Followers\n",
        format_count(account.public_repo_count),
        format_count(account.following_count),
        format_count(account.follower_count)
    ));
    if let Some(created_at) = account.created_at {
        output.push_str(&format!("Joined {}\n", created_at.format("%B %Y")));
    }

    output
}

fn header(list: &RepositoryList, column: Column) -> String {
    match list.sort_indicator(column) {
        Some(direction) => format!("{} {}", column.header(), direction.arrow()),
        None => column.header().to_string(),
    }
}

/// Name column text: `name (Language)` when the language is known
fn name_cell(repo: &Repository) -> String {
    match &repo.language {
        Some(language) => format!("{} ({})", repo.name, language),
        None => repo.name.clone(),
    }
}

fn table_line(cells: &[String], widths: &[usize]) -> String {
    format!(
        "{:<w0$}  {:<w1$}  {:>w2$}  {}\n",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    )
}

/// Current page as an aligned table followed by the pager line
pub fn render_page(list: &RepositoryList) -> String {
    let rows = list.visible_rows();
    let summary = list.pagination();

    let headers: Vec<String> = Column::ALL.iter().map(|&c| header(list, c)).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|repo| {
            vec![
                name_cell(repo),
                truncate(repo.description.as_deref().unwrap_or(""), DESCRIPTION_WIDTH),
                format_count(repo.star_count),
                repo.url.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = table_line(&headers, &widths);
    for row in &cells {
        output.push_str(&table_line(row, &widths));
    }
    if rows.is_empty() {
        output.push_str("(no repositories)\n");
    }

    output.push_str(&format!(
        "\nPage {} of {} ({} repositories loaded{})\n",
        summary.index + 1,
        summary.page_count,
        summary.total_rows,
        if list.can_request_more() {
            ", more available with --all"
        } else {
            ""
        }
    ));

    output
}

pub fn page_json(list: &RepositoryList) -> Value {
    let summary = list.pagination();
    json!({
        "account": list.account(),
        "sort": list.sort().map(|s| s.to_string()),
        "page": summary.index + 1,
        "page_count": summary.page_count,
        "page_size": summary.size,
        "total_loaded": summary.total_rows,
        "more_available": list.can_request_more(),
        "repositories": list.visible_rows(),
    })
}
