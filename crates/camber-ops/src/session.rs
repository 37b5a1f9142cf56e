use std::cell::{RefCell, RefMut};

use camber_kernel::{Kernel, MockKernel, TruckKernel};
use camber_types::{
    Frame, FrameGuard, FrameStack, KernelPlane, KernelPoint, KernelVector, LocalPoint, LocalVector,
};

/// One modeling session: a geometry kernel plus its workplane stack.
///
/// Sessions are self-contained — several can coexist in one process, each
/// with its own kernel state and frame stack. Everything is
/// single-threaded by design; the `RefCell`s make the type `!Sync`, so the
/// compiler enforces the discipline.
pub struct Session<K: Kernel> {
    kernel: RefCell<K>,
    frames: FrameStack,
}

impl Session<TruckKernel> {
    /// Session backed by the real truck kernel.
    pub fn with_truck() -> Self {
        Self::new(TruckKernel::new())
    }
}

impl Session<MockKernel> {
    /// Session backed by the deterministic mock kernel, for tests.
    pub fn with_mock() -> Self {
        Self::new(MockKernel::new())
    }
}

impl<K: Kernel> Session<K> {
    pub fn new(kernel: K) -> Self {
        Self {
            kernel: RefCell::new(kernel),
            frames: FrameStack::new(),
        }
    }

    /// The session's workplane stack.
    pub fn frames(&self) -> &FrameStack {
        &self.frames
    }

    /// Activate `frame` for the lifetime of the returned guard.
    pub fn scoped_frame(&self, frame: Frame) -> FrameGuard<'_> {
        self.frames.scoped(frame)
    }

    /// Direct access to the backing kernel. Handles obtained this way are
    /// runtime-only; never persist them.
    pub fn kernel(&self) -> RefMut<'_, K> {
        self.kernel.borrow_mut()
    }

    /// Run a point argument through the full chain: local → world
    /// (current frame) → kernel (convention adapter).
    pub(crate) fn resolve_point(&self, p: LocalPoint) -> KernelPoint {
        self.frames.current().to_world(p).to_kernel()
    }

    /// Same chain for direction/normal arguments: the linear part only,
    /// never the frame origin.
    pub(crate) fn resolve_vector(&self, v: LocalVector) -> KernelVector {
        self.frames.current().to_world_vector(v).to_kernel()
    }

    /// The current frame as a kernel-space working plane.
    pub(crate) fn current_plane(&self) -> KernelPlane {
        self.frames.current().kernel_plane()
    }
}
