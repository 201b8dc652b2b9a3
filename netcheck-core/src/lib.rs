//! Generic syntax validators for network and identity form fields.
//!
//! Every validator takes raw user input as a string slice and returns a
//! [`ValidationOutcome`] value; nothing here panics or returns `Err`. Empty
//! or whitespace-only input is always accepted — whether a field is required
//! is the caller's policy, not a syntax question.

pub mod field;
pub mod host;
pub mod ip;
pub mod outcome;

pub use field::{
    validate_group_name, validate_interface_name, validate_key_lifetime, validate_port,
    validate_tunnel_name,
};
pub use host::{validate_fqdn_or_ip, validate_url, validate_uuid};
pub use ip::{ipv4_to_u32, validate_cidr, validate_cidr_list, validate_ip_range, validate_ipv4};
pub use outcome::ValidationOutcome;
