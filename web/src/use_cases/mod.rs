pub mod render_page;

#[cfg(test)]
pub(crate) mod test_support;
