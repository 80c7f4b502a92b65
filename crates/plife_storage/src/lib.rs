pub mod codec;
pub mod error;
pub mod snapshot;

pub use codec::{StateUpdate, decode, decode_into, encode};
pub use error::{Result, StorageError};
pub use snapshot::{Snapshot, load_snapshot, save_snapshot};
