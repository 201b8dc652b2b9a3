//! Remote-access VPN design assembly and artifact generation.
//!
//! One canonical [`record::ConfigRecord`] describes a remote-access IPsec
//! VPN design: tunnels, negotiation parameters, client addressing, split
//! tunneling, and SAML identity federation. Everything in this crate reads
//! that record and produces values — nothing here mutates it, performs I/O
//! beyond the record file loader, or raises across the API boundary.
//!
//! # Architecture
//!
//! ## Model
//!
//! - [`record`] — the configuration record and its file loader
//! - [`enums`] — closed enumerations for proposals, DH groups, and modes
//! - [`defaults`] — the single shared default-substitution table
//! - [`labels`] — proposal and DH-group display names
//!
//! ## Generation
//!
//! - [`generate`] — five deterministic `record -> text` artifact renderers:
//!   appliance CLI script, GUI walkthrough, identity-provider setup guide,
//!   importable client profile, and a markdown summary. All five consult
//!   the same default and label tables, so they stay structurally
//!   consistent for any one record.
//!
//! ## Assessment
//!
//! - [`validate`] — field-by-field syntax sweep built on `netcheck-core`
//! - [`score`] — security-posture and completeness grading
//! - [`report`] — terminal-friendly rendering of sweep and score results
//!
//! # Workflow
//!
//! 1. **Load** a record file (JSON or TOML), or start from
//!    [`record::ConfigRecord::recommended`]
//! 2. **Validate** field syntax with [`validate::check_record`]
//! 3. **Score** the design with [`score::evaluate`]
//! 4. **Generate** whichever artifacts the operator needs
//!
//! # Examples
//!
//! ```
//! use ravpn_gen::generate::{render, Target};
//! use ravpn_gen::record::ConfigRecord;
//! use ravpn_gen::score::evaluate;
//!
//! let record = ConfigRecord::recommended();
//! let script = render(&record, Target::CliScript);
//! assert!(script.contains("config vpn ipsec phase1-interface"));
//!
//! let posture = evaluate(&record);
//! assert!(posture.score <= 100);
//! ```
//!
//! # Built on netcheck-core
//!
//! Field syntax rules (addresses, ranges, identifiers, URLs) live in the
//! generic `netcheck-core` crate; everything VPN-specific is here.

pub mod defaults;
pub mod enums;
pub mod generate;
pub mod labels;
pub mod record;
pub mod report;
pub mod score;
pub mod validate;
