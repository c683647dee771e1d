//! Windowed page-number sequences for navigation rendering
//!
//! Pure rendering aid, not part of the data contract: the window always shows
//! the first and last page plus the current page's two neighbors on each side,
//! with ellipsis markers standing in for the elided runs.

/// One slot in a rendered page-number sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMark {
    Page(usize),
    Ellipsis,
}

/// Build the windowed page-number sequence for a pagination control
///
/// Pages are 1-indexed. A page is shown when it is the first, the last, or
/// within two of the current page; each elided run collapses to a single
/// ellipsis marker.
pub fn page_window(current: usize, total: usize) -> Vec<PageMark> {
    let mut marks = Vec::new();
    let mut elided = false;

    for page in 1..=total {
        let shown = page == 1
            || page == total
            || (page + 2 >= current && page <= current + 2);

        if shown {
            marks.push(PageMark::Page(page));
            elided = false;
        } else if !elided {
            marks.push(PageMark::Ellipsis);
            elided = true;
        }
    }

    marks
}
