//! Application services and ports.

#![forbid(unsafe_code)]

mod access_service;
mod capabilities;
mod scope_resolver;
mod session_ports;

pub use access_service::AccessService;
pub use capabilities::{Capabilities, Capability, CapabilityMemo, CapabilitySummary};
pub use scope_resolver::{resolve_scoped_permission, resolve_scoped_permission_raw};
pub use session_ports::{ActiveSession, SessionRepository, UserDirectory};
