//! Volatile database handle

/// Handle for the in-process backend; there is nothing to connect or release
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase;

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self
    }

    pub async fn open(&mut self) {}

    pub async fn close(&mut self) {}
}
