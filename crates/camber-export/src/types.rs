use camber_kernel::KernelError;
use camber_ops::OpError;

/// Errors from file export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Op(#[from] OpError),

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error("nothing to export: no solids among the given shapes")]
    NothingToExport,

    #[error("STEP export takes exactly one solid, found {count}; union them first")]
    MultipleSolids { count: usize },
}
