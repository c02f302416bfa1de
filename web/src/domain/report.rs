// User attached to an error report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserContext {
    pub id: u64,
    pub email: String,
}

// Extra data sent along with a captured error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportContext {
    pub user: Option<UserContext>,
}

impl ReportContext {
    // Pretend this is extracted from the session.
    pub fn demo_user() -> Self {
        Self {
            user: Some(UserContext {
                id: 666,
                email: "zasdaym@gmail.com".to_string(),
            }),
        }
    }
}
