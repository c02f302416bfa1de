// Which epoch lookup a route performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpochQuery {
    // Asks the database for the current unix time.
    Current,
    // Calls a function the database does not have, so it always fails.
    Broken,
}
