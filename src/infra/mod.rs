//! Infrastructure: filesystem persistence and the time source.

pub mod clock;
pub mod fs;

pub use clock::{Clock, ManualClock, SystemClock};
pub use fs::{FsError, load_document, read_document, save_document};
