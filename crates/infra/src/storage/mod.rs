mod codec;
pub mod json_file;
pub mod memory;

pub use codec::{decode, encode};
pub use json_file::{is_valid_slot, FileStorageError, JsonFileStorage};
pub use memory::MemoryStorage;
