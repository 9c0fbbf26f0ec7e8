use std::fmt;
use std::str::FromStr;

/// Which pages to search for tables.
///
/// Parsed from the `--pages` argument before the document is opened and
/// resolved against the real page count afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageSelection {
    /// Every page of the document.
    #[default]
    All,
    /// A 1-indexed range expression such as `1,3-5` or `2-end`.
    Ranges(String),
}

impl PageSelection {
    /// Resolve into sorted, deduplicated 0-indexed page numbers.
    pub fn resolve(&self, page_count: usize) -> Result<Vec<usize>, String> {
        match self {
            PageSelection::All => Ok((0..page_count).collect()),
            PageSelection::Ranges(range) => parse_page_range(range, page_count),
        }
    }
}

impl FromStr for PageSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("page range is empty".to_string());
        }
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (start, end) = part.split_once('-').unwrap_or((part, part));
            for bound in [start, end] {
                let bound = bound.trim();
                let is_number = !bound.is_empty() && bound.chars().all(|c| c.is_ascii_digit());
                if !is_number && !bound.eq_ignore_ascii_case("end") {
                    return Err(format!("invalid page number: '{bound}'"));
                }
            }
        }
        Ok(PageSelection::Ranges(s.to_string()))
    }
}

impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSelection::All => f.write_str("all"),
            PageSelection::Ranges(range) => f.write_str(range),
        }
    }
}

/// Parse a page range string like "1,3-5" or "2-end" into a sorted list of
/// 0-indexed page numbers.
///
/// Input is 1-indexed (user-facing). Output is 0-indexed (internal).
/// `end` stands for the last page. Returns an error for invalid input
/// (page 0, malformed ranges, pages past the end, etc.).
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, String> {
    let mut pages = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some((start_str, end_str)) = part.split_once('-') {
            let start = parse_page(start_str, page_count)?;
            let end = parse_page(end_str, page_count)?;

            if start > end {
                return Err(format!("invalid page range: '{part}' (start after end)"));
            }

            for p in start..=end {
                pages.push(p - 1); // convert to 0-indexed
            }
        } else {
            pages.push(parse_page(part, page_count)? - 1);
        }
    }

    pages.sort();
    pages.dedup();
    Ok(pages)
}

/// Parse one 1-indexed page number (or `end`) and check it against the count.
fn parse_page(raw: &str, page_count: usize) -> Result<usize, String> {
    let raw = raw.trim();
    let page = if raw.eq_ignore_ascii_case("end") {
        page_count
    } else {
        raw.parse()
            .map_err(|_| format!("invalid page number: '{raw}'"))?
    };

    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    if page > page_count {
        return Err(format!(
            "page {page} exceeds document page count ({page_count})"
        ));
    }
    Ok(page)
}
