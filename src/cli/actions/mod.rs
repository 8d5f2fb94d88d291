pub mod server;

/// What the binary was asked to do.
#[derive(Debug)]
pub enum Action {
    Server(server::Args),
}

impl Action {
    /// Run the action to completion.
    /// # Errors
    /// Returns an error if the server fails to bind or stops with an error.
    pub async fn execute(self) -> anyhow::Result<()> {
        match self {
            Self::Server(args) => server::execute(args).await,
        }
    }
}
