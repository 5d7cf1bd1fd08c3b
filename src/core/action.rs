//! Named input latches and their registry.
//!
//! A latch holds exactly one value: the idle value, or whatever the last
//! `set` stored since the last `release`. Both instantiations used by the
//! crate (`bool` for held keys, `Option<CellPosition>` for last-click cells)
//! pack losslessly into a single `AtomicU64`, so the event thread can write
//! and the polling thread can read without locks and without torn values.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::geometry::CellPosition;

/// Payload of an [`ActionState`]: a value with a fixed idle form and a
/// lossless single-word encoding.
pub trait LatchValue: Copy + PartialEq {
    const IDLE: Self;

    fn pack(self) -> u64;
    fn unpack(raw: u64) -> Self;
}

impl LatchValue for bool {
    const IDLE: Self = false;

    fn pack(self) -> u64 {
        self as u64
    }

    fn unpack(raw: u64) -> Self {
        raw != 0
    }
}

// Empty sentinel for the click latch. (i32::MIN, i32::MIN) is only reachable
// from a pointer ~2^31 pixels off-screen, which no event source delivers.
const CLICK_NONE: u64 = pack_cell(CellPosition {
    col: i32::MIN,
    row: i32::MIN,
});

const fn pack_cell(cell: CellPosition) -> u64 {
    ((cell.col as u32 as u64) << 32) | (cell.row as u32 as u64)
}

const fn unpack_cell(raw: u64) -> CellPosition {
    CellPosition {
        col: (raw >> 32) as u32 as i32,
        row: raw as u32 as i32,
    }
}

impl LatchValue for Option<CellPosition> {
    const IDLE: Self = None;

    fn pack(self) -> u64 {
        match self {
            Some(cell) => pack_cell(cell),
            None => CLICK_NONE,
        }
    }

    fn unpack(raw: u64) -> Self {
        if raw == CLICK_NONE {
            None
        } else {
            Some(unpack_cell(raw))
        }
    }
}

/// One named latch. Created at registry configuration time and mutated only
/// through atomic single-value swaps thereafter.
pub struct ActionState<T: LatchValue> {
    key: String,
    raw: AtomicU64,
    _payload: PhantomData<T>,
}

impl<T: LatchValue> ActionState<T> {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            raw: AtomicU64::new(T::IDLE.pack()),
            _payload: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is(&self, key: &str) -> bool {
        self.key == key
    }

    pub fn value(&self) -> T {
        T::unpack(self.raw.load(Ordering::SeqCst))
    }

    pub fn set(&self, value: T) {
        self.raw.store(value.pack(), Ordering::SeqCst);
    }

    /// Resets to the idle value. Idempotent.
    pub fn release(&self) {
        self.set(T::IDLE);
    }
}

impl<T: LatchValue> std::fmt::Debug for ActionState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionState")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of named latches, looked up by one linear traversal.
///
/// Mutating or querying a key that was never registered is a silent no-op /
/// idle read, so the host never needs to distinguish "unbound" from
/// "inactive".
#[derive(Debug, Default)]
pub struct ActionRegistry<T: LatchValue> {
    states: Vec<ActionState<T>>,
}

impl<T: LatchValue> ActionRegistry<T> {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Registers a latch at configuration time.
    pub fn register(&mut self, key: impl Into<String>) {
        self.states.push(ActionState::new(key));
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn find(&self, key: &str) -> Option<&ActionState<T>> {
        self.states.iter().find(|state| state.is(key))
    }

    pub fn set(&self, key: &str, value: T) {
        match self.find(key) {
            Some(state) => state.set(value),
            None => tracing::trace!(key, "set on unregistered action ignored"),
        }
    }

    pub fn release(&self, key: &str) {
        match self.find(key) {
            Some(state) => state.release(),
            None => tracing::trace!(key, "release on unregistered action ignored"),
        }
    }

    /// Current value, or the idle value if the key is not registered.
    pub fn value(&self, key: &str) -> T {
        self.find(key).map_or(T::IDLE, ActionState::value)
    }
}

impl ActionRegistry<bool> {
    pub fn press(&self, key: &str) {
        self.set(key, true);
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.value(key)
    }
}
