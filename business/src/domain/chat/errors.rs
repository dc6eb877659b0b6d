#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChatError {
    #[error("Upstream call failed")]
    UpstreamUnavailable { reason: String },
}
