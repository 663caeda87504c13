//! A growable circular buffer.
//!
//! [`CircBuf`] keeps the most recent values pushed into it: appending to a
//! full buffer overwrites the oldest element instead of failing or
//! reallocating. Removal is from the front, making the buffer a FIFO queue
//! with a bounded memory footprint, and `O(1)` indexing addresses elements
//! by logical position (0 is the oldest).
//!
//! Capacity is chosen at construction and only changes when explicitly
//! asked to: [`CircBuf::reserve`] migrates the contents into a larger
//! block and [`CircBuf::resize`] adjusts the element count, both
//! preserving logical order.
//!
//! # Feature Flags
//!
//! The **circbuf** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; disable for `no_std` builds (an allocator is still
//!     required)
//!
//! - `serde`
//!   - Optional
//!   - Serialize as a sequence of the logical elements; deserialize from
//!     any sequence, growing to fit
//!
//! # Usage
//!
//! ```
//! use circbuf::CircBuf;
//!
//! let mut recent: CircBuf<u32> = CircBuf::with_capacity(3);
//!
//! recent.push_back(1);
//! recent.push_back(2);
//! assert_eq!(recent.len(), 2);
//!
//! assert_eq!(recent.pop_front(), Some(1));
//! assert_eq!(recent.pop_front(), Some(2));
//! assert_eq!(recent.pop_front(), None);
//! ```
//!
//! # Overwriting
//!
//! ```
//! use circbuf::CircBuf;
//!
//! let mut recent: CircBuf<u32> = CircBuf::with_capacity(3);
//!
//! recent.extend(0..5);
//!
//! // Only the three most recent values are kept.
//! assert_eq!(recent.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
//! ```
//!
//! # Growth
//!
//! ```
//! use circbuf::CircBuf;
//!
//! let mut buf: CircBuf<u32> = CircBuf::with_capacity(2);
//! buf.push_back(1);
//! buf.push_back(2);
//!
//! buf.reserve(4);
//! buf.push_back(3);
//!
//! assert_eq!(buf.capacity(), 4);
//! assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
//!
//! # Iterators
//!
//! ```
//! use circbuf::CircBuf;
//!
//! let buf: CircBuf<u32> = (0..5).collect();
//!
//! let doubled: Vec<u32> = buf.iter().map(|v| v * 2).collect();
//! assert_eq!(doubled, vec![0, 2, 4, 6, 8]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod circbuf;
pub mod error;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod utils;

pub use crate::circbuf::CircBuf;
pub use crate::error::CapacityError;
pub use crate::iter::{IntoIter, Iter, IterMut};
