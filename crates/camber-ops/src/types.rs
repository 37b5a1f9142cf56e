use camber_kernel::{KernelError, ShapeKind};
use camber_types::FrameError;

/// Errors from modeling operations.
///
/// Validation failures are raised at the operation boundary before any
/// kernel call; kernel failures are wrapped, never swallowed or retried.
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("invalid operand: {reason}")]
    InvalidOperand { reason: String },

    #[error("{operation} is not supported for {kind} shapes")]
    UnsupportedShape {
        operation: String,
        kind: ShapeKind,
    },

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),
}

impl OpError {
    pub(crate) fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_operand(reason: impl Into<String>) -> Self {
        Self::InvalidOperand {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(operation: impl Into<String>, kind: ShapeKind) -> Self {
        Self::UnsupportedShape {
            operation: operation.into(),
            kind,
        }
    }
}
