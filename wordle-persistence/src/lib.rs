pub mod clock;
pub mod selector;
pub mod store;

pub mod repositories;

pub use clock::{Clock, FixedClock, SystemClock};
pub use repositories::GameRepository;
pub use selector::{IndexPicker, RandomPicker, WordSelector, WordSource, DAILY_WORD_KEY};
pub use store::{KeyValueStore, MemoryStore};
