//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for instrument metadata and time
//! - **Use Cases**: Recording, editing, re-statusing and reporting trades
//! - **DTOs**: Data transfer objects for the JSON boundary

pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use use_cases::*;
