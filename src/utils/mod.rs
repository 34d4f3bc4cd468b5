//! Small shared helpers used across layers.

pub mod client_ip;
pub mod destination;
pub mod key_format;
pub mod short_url;
