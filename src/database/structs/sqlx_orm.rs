use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SqlxOrm {
    pub(crate) acquire_timeout: Duration,
    pub(crate) slow_statement_threshold: Duration,
}
