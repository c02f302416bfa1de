// The two fetch-and-display pages served by the front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Good,
    Bad,
}

impl PageKind {
    // Path requested from the backend API for this page.
    pub fn backend_path(self) -> &'static str {
        match self {
            PageKind::Good => "/good",
            PageKind::Bad => "/bad",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            PageKind::Good => "Good",
            PageKind::Bad => "Bad",
        }
    }

    // Only the good page asks for uncached responses.
    pub fn no_store(self) -> bool {
        matches!(self, PageKind::Good)
    }
}

// Result of one render: the heading plus either the fetched body or "".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    pub kind: PageKind,
    pub body: String,
}
