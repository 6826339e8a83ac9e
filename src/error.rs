use thiserror::Error;

/// Failures from the netlink layer and the components driving it.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Non-zero error frame in a netlink acknowledgement.
    #[error("kernel errno {errno}: {}", .message.as_deref().unwrap_or("-"))]
    Kernel { errno: i32, message: Option<String> },

    #[error("parse: {0}")]
    Parse(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl NetError {
    pub fn kernel(errno: i32, message: Option<String>) -> NetError {
        NetError::Kernel { errno, message }
    }

    /// True for the error classes the reconciler demotes to warnings:
    /// the kernel may simply have converged ahead of us.
    pub fn is_route_noise(&self) -> bool {
        matches!(self, NetError::Kernel { .. } | NetError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, NetError>;
