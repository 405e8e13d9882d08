//! Shared application service layer for shortroute.
//!
//! Frontends drive a [`Session`]: submit roads through the [`RoadForm`],
//! list and view the network, and ask for shortest routes. The interactive
//! shell feeds it [`Command`]s parsed from text lines.

pub mod command;
pub mod error;
pub mod form;
pub mod session;

// Re-export key types for convenience
pub use command::{Command, HELP, parse_command};
pub use error::{AppError, AppResult};
pub use form::{ParsedRoad, RoadForm};
pub use session::{Reply, RoadAdded, RouteReport, Session};
