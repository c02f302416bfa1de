pub mod read_epoch;

#[cfg(test)]
pub(crate) mod test_support;
