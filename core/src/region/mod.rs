//! Fixed-capacity bump region.
//!
//! A `Region` owns one contiguous buffer and hands out aligned slices of it by
//! advancing a single offset. Individual allocations are never freed; the whole
//! region is recycled with [`Region::reset`] and released when dropped.
//!
//! ```text
//!   base                      base + offset             base + capacity
//!    │                              │                          │
//!    ▼                              ▼                          ▼
//!    ┌────┬──┬──────┬───┬──────────┬──────────────────────────┐
//!    │ A1 │░░│  A2  │░░░│    A3    │        free space        │
//!    └────┴──┴──────┴───┴──────────┴──────────────────────────┘
//!          ▲           ▲
//!          └ padding ──┘ (inserted to honour each alignment)
//! ```
//!
//! Everything allocated through `&Region` borrows the region, so the borrow
//! checker rejects any use of an allocation after `reset` (which takes
//! `&mut self`) or after the region is dropped.
//!
//! ## Example
//!
//! ```
//! use tally_core::region::Region;
//!
//! let mut region = Region::new(1024).unwrap();
//! let n = region.alloc(42u64).unwrap();
//! assert_eq!(*n, 42);
//! assert_eq!(region.used(), 8);
//!
//! region.reset();
//! assert_eq!(region.used(), 0);
//! ```

mod error;


pub use error::RegionError;

use core::{
    cell::Cell,
    fmt,
    mem::{align_of, size_of},
    ops::Deref,
    ptr::{self, NonNull},
};
use static_assertions::const_assert;
use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};

pub const KIB: usize = 1024;
pub const MIB: usize = 1024 * KIB;
pub const GIB: usize = 1024 * MIB;

/// Capacity used by [`Region::default`].
pub const DEFAULT_CAPACITY: usize = 4 * MIB;

/// Alignment used when the caller has no stronger requirement. Also the
/// alignment of the region's base address.
pub const DEFAULT_ALIGNMENT: usize = 2 * size_of::<usize>();

const_assert!(DEFAULT_ALIGNMENT.is_power_of_two());
const_assert!(DEFAULT_CAPACITY > 0);

/// A linear allocation region with a monotonically advancing offset.
pub struct Region {
    base: NonNull<u8>,
    layout: Layout,
    offset: Cell<usize>,
}

impl Region {
    /// Create a region backed by a fresh buffer of `capacity` bytes.
    ///
    /// Failure of the system allocator itself is fatal and aborts through
    /// [`handle_alloc_error`].
    pub fn new(capacity: usize) -> Result<Self, RegionError> {
        if capacity == 0 {
            return Err(RegionError::ZeroCapacity);
        }
        let layout = Layout::from_size_align(capacity, DEFAULT_ALIGNMENT)
            .map_err(|_| RegionError::InvalidCapacity { capacity })?;

        // SAFETY: `layout` has a non-zero size.
        let ptr = unsafe { alloc(layout) };
        let Some(base) = NonNull::new(ptr) else {
            handle_alloc_error(layout)
        };

        Ok(Self {
            base,
            layout,
            offset: Cell::new(0),
        })
    }

    /// Total number of bytes owned by the region.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.layout.size()
    }

    /// Bytes consumed so far, padding included.
    #[inline]
    pub fn used(&self) -> usize {
        self.offset.get()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.used()
    }

    /// Address of the first byte of the buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.base.as_ptr()
    }

    /// Returns true if `ptr` points into the region's buffer.
    pub fn contains(&self, ptr: *const u8) -> bool {
        let start = self.as_ptr() as usize;
        let addr = ptr as usize;
        addr >= start && addr < start + self.capacity()
    }

    /// Reserve `size` bytes whose address is a multiple of `align`.
    ///
    /// The returned memory is uninitialized. On failure the offset is left
    /// untouched and the region stays usable.
    pub fn allocate(&self, size: usize, align: usize) -> Result<NonNull<u8>, RegionError> {
        if !align.is_power_of_two() {
            return Err(RegionError::InvalidAlignment { align });
        }

        let offset = self.offset.get();
        let remaining = self.capacity() - offset;
        let current = self.base.as_ptr() as usize + offset;

        let padding = current
            .checked_add(align - 1)
            .map(|end| (end & !(align - 1)) - current);
        let needed = padding.and_then(|padding| padding.checked_add(size));
        let (padding, needed) = match (padding, needed) {
            (Some(padding), Some(needed)) if needed <= remaining => (padding, needed),
            _ => {
                tracing::warn!(requested = size, align, remaining, "region exhausted");
                return Err(RegionError::OutOfRegion {
                    requested: size,
                    remaining,
                });
            }
        };

        self.offset.set(offset + needed);

        // SAFETY: `offset + padding <= offset + needed <= capacity`, so the
        // pointer stays inside (or one past the end of) the buffer.
        Ok(unsafe { self.base.add(offset + padding) })
    }

    /// Like [`Region::allocate`], with every byte set to zero.
    #[allow(clippy::mut_from_ref)]
    pub fn allocate_zeroed(&self, size: usize, align: usize) -> Result<&mut [u8], RegionError> {
        let ptr = self.allocate(size, align)?;

        // SAFETY: `allocate` reserved `size` bytes at `ptr` that no other
        // reference points to, and they are initialized before the slice is
        // created.
        unsafe {
            ptr::write_bytes(ptr.as_ptr(), 0, size);
            Ok(core::slice::from_raw_parts_mut(ptr.as_ptr(), size))
        }
    }

    /// Move `value` into the region.
    ///
    /// The value's destructor never runs.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc<T>(&self, value: T) -> Result<&mut T, RegionError> {
        let ptr = self.allocate(size_of::<T>(), align_of::<T>())?.cast::<T>();

        // SAFETY: the slot is properly sized, aligned for `T` and exclusively
        // ours until the region is reset.
        unsafe {
            ptr.as_ptr().write(value);
            Ok(&mut *ptr.as_ptr())
        }
    }

    /// Copy a string into the region.
    pub fn alloc_str(&self, s: &str) -> Result<&str, RegionError> {
        let ptr = self.allocate(s.len(), 1)?;

        // SAFETY: the destination holds `s.len()` fresh bytes and the copy is
        // valid UTF-8 because the source is.
        unsafe {
            ptr::copy_nonoverlapping(s.as_ptr(), ptr.as_ptr(), s.len());
            let bytes = core::slice::from_raw_parts(ptr.as_ptr(), s.len());
            Ok(core::str::from_utf8_unchecked(bytes))
        }
    }

    /// Forget every allocation. The buffer is kept for reuse.
    pub fn reset(&mut self) {
        tracing::trace!(used = self.used(), "resetting region");
        self.offset.set(0);
    }

    /// Borrow the region for a unit of work; it is reset when the returned
    /// guard goes out of scope.
    pub fn scope(&mut self) -> RegionScope<'_> {
        RegionScope { region: self }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY).expect("default region capacity is valid")
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        // SAFETY: `base` was returned by `alloc` with exactly this layout.
        unsafe { dealloc(self.base.as_ptr(), self.layout) }
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("base", &self.base)
            .field("capacity", &self.capacity())
            .field("used", &self.used())
            .finish()
    }
}

/// Guard returned by [`Region::scope`]. Derefs to the region and resets it on
/// drop, so nothing allocated through it can outlive the scope.
#[derive(Debug)]
pub struct RegionScope<'r> {
    region: &'r mut Region,
}

impl Deref for RegionScope<'_> {
    type Target = Region;

    fn deref(&self) -> &Region {
        self.region
    }
}

impl Drop for RegionScope<'_> {
    fn drop(&mut self) {
        self.region.reset();
    }
}
