//! Closed enumerations for the selectable negotiation parameters.
//!
//! Selections live in the record as values of these types, so a record file
//! naming an unknown proposal or DH group fails at load time instead of
//! producing a half-valid design.

use serde::{Deserialize, Serialize};

/// IKE encryption/integrity proposal, shared by phase 1 and phase 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proposal {
    #[serde(rename = "aes128-sha256")]
    Aes128Sha256,
    #[serde(rename = "aes256-sha256")]
    Aes256Sha256,
    #[serde(rename = "aes128gcm")]
    Aes128Gcm,
    #[serde(rename = "aes256gcm")]
    Aes256Gcm,
    #[serde(rename = "chacha20poly1305")]
    Chacha20Poly1305,
}

impl Proposal {
    /// The strongest documented proposal.
    pub const STRONGEST: Proposal = Proposal::Aes256Gcm;

    /// Appliance CLI identifier.
    pub fn id(self) -> &'static str {
        match self {
            Proposal::Aes128Sha256 => "aes128-sha256",
            Proposal::Aes256Sha256 => "aes256-sha256",
            Proposal::Aes128Gcm => "aes128gcm",
            Proposal::Aes256Gcm => "aes256gcm",
            Proposal::Chacha20Poly1305 => "chacha20poly1305",
        }
    }

    /// Authenticated-encryption (GCM/ChaCha) variant.
    pub fn is_aead(self) -> bool {
        matches!(
            self,
            Proposal::Aes128Gcm | Proposal::Aes256Gcm | Proposal::Chacha20Poly1305
        )
    }
}

/// Diffie-Hellman key-exchange group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DhGroup {
    #[serde(rename = "14")]
    G14,
    #[serde(rename = "15")]
    G15,
    #[serde(rename = "16")]
    G16,
    #[serde(rename = "19")]
    G19,
    #[serde(rename = "20")]
    G20,
    #[serde(rename = "21")]
    G21,
}

impl DhGroup {
    /// Numeric group identifier as the appliance CLI expects it.
    pub fn number(self) -> u8 {
        match self {
            DhGroup::G14 => 14,
            DhGroup::G15 => 15,
            DhGroup::G16 => 16,
            DhGroup::G19 => 19,
            DhGroup::G20 => 20,
            DhGroup::G21 => 21,
        }
    }
}

/// How clients learn their DNS servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DnsMode {
    #[default]
    Auto,
    Manual,
}

/// Whether only selected destinations are routed through the tunnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    #[default]
    Disabled,
    Enabled,
}
