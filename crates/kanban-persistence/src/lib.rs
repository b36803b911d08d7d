pub mod repository;
pub mod save_worker;
pub mod serialization;
pub mod store;
pub mod traits;

pub use repository::*;
pub use save_worker::*;
pub use serialization::*;
pub use store::*;
pub use traits::*;
