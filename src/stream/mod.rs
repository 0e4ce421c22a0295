//! Byte-source abstraction feeding the command dispatcher.
//!
//! The dispatcher never talks to hardware directly. It drains any type
//! implementing [`ByteSource`], which models the "bytes available" and
//! "read one byte" pair exposed by UART drivers, radio modems and USB CDC
//! stacks. Implementations must not block: when nothing is pending,
//! [`available`](ByteSource::available) returns zero and the dispatcher
//! returns to the caller.
//!
//! Ready-made sources:
//!
//! - [`SliceSource`]: replays a borrowed byte slice
//! - [`heapless::Deque`]: a FIFO the application fills itself
//! - [`heapless::spsc::Consumer`]: the consumer half of a ring buffer fed
//!   from a receive interrupt
//!
//! ```rust
//! use heapless::spsc::Queue;
//! use serialcmd::stream::ByteSource;
//!
//! let mut queue: Queue<u8, 16> = Queue::new();
//! let (mut producer, mut consumer) = queue.split();
//!
//! // In firmware this half lives in the UART RX interrupt.
//! for &byte in b"PING\n" {
//!     producer.enqueue(byte).unwrap();
//! }
//!
//! assert_eq!(consumer.available(), 5);
//! assert_eq!(consumer.read_byte(), Ok(Some(b'P')));
//! ```

#![deny(unsafe_code)]

use core::convert::Infallible;

use heapless::Deque;
use heapless::spsc::Consumer;

/// A non-blocking source of bytes.
pub trait ByteSource {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Number of bytes that can be read without blocking.
    fn available(&self) -> usize;

    /// Read one byte. `Ok(None)` means nothing is pending right now.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn available(&self) -> usize {
        (**self).available()
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }
}

/// Byte source draining a borrowed slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
}

impl<'a> SliceSource<'a> {
    /// Create a source yielding `data` front to back.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Bytes not read yet.
    pub fn remaining(&self) -> &'a [u8] {
        self.data
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = Infallible;

    fn available(&self) -> usize {
        self.data.len()
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        match self.data.split_first() {
            Some((&byte, rest)) => {
                self.data = rest;
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }
}

impl<const N: usize> ByteSource for Deque<u8, N> {
    type Error = Infallible;

    fn available(&self) -> usize {
        self.len()
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.pop_front())
    }
}

impl<const N: usize> ByteSource for Consumer<'_, u8, N> {
    type Error = Infallible;

    fn available(&self) -> usize {
        self.len()
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.dequeue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_drains_in_order() {
        let mut source = SliceSource::new(b"ab");
        assert_eq!(source.available(), 2);
        assert_eq!(source.read_byte(), Ok(Some(b'a')));
        assert_eq!(source.remaining(), b"b");
        assert_eq!(source.read_byte(), Ok(Some(b'b')));
        assert_eq!(source.available(), 0);
        assert_eq!(source.read_byte(), Ok(None));
    }

    #[test]
    fn deque_source_pops_front() {
        let mut deque: Deque<u8, 4> = Deque::new();
        deque.push_back(b'x').unwrap();
        deque.push_back(b'y').unwrap();
        assert_eq!(deque.available(), 2);
        assert_eq!(deque.read_byte(), Ok(Some(b'x')));
        assert_eq!(deque.read_byte(), Ok(Some(b'y')));
        assert_eq!(deque.read_byte(), Ok(None));
    }

    #[test]
    fn mutable_reference_is_a_source() {
        let mut source = SliceSource::new(b"z");
        let mut by_ref = &mut source;
        assert_eq!(by_ref.available(), 1);
        assert_eq!(by_ref.read_byte(), Ok(Some(b'z')));
        assert_eq!(source.available(), 0);
    }
}
