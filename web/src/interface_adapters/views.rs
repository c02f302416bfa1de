use crate::domain::RenderedPage;
use askama::Template;

// Home page listing both fetch pages.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeView;

// One fetch page; the body is auto-escaped as text.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageView<'a> {
    pub heading: &'a str,
    pub body: &'a str,
}

impl<'a> From<&'a RenderedPage> for PageView<'a> {
    fn from(page: &'a RenderedPage) -> Self {
        Self {
            heading: page.kind.heading(),
            body: &page.body,
        }
    }
}
