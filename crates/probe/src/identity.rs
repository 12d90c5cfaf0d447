//! Composite device identifier.
//!
//! Three weak identifiers are folded into one 128-bit value. The hash and
//! bit layout are fixed: changing either changes every identifier ever
//! produced.

use uuid::Uuid;

/// Text an absent identifier contributes to the hash.
pub const NULL_TEXT: &str = "null";

/// Raw identifier strings supplied by the host.
///
/// Values are taken as-is: empty strings and the literal `"null"` are
/// legitimate inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawIdentifiers {
    /// Telephony device id (IMEI/MEID).
    pub device_id: Option<String>,
    pub sim_serial: Option<String>,
    /// Per-installation secure id.
    pub secure_id: Option<String>,
    pub mac: Option<String>,
}

impl RawIdentifiers {
    /// Synthesizes the composite identifier for these values.
    pub fn composite(&self) -> Uuid {
        synthesize(
            self.device_id.as_deref(),
            self.sim_serial.as_deref(),
            self.secure_id.as_deref(),
        )
    }
}

/// 32-bit string hash: `h = 31 * h + unit` over UTF-16 code units.
pub fn java_string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Builds the composite identifier.
///
/// The most significant word is the sign-extended hash of `secure_id`. The
/// least significant word is the device hash in the high half and the SIM
/// hash, masked to 32 bits, in the low half.
pub fn synthesize(
    device_id: Option<&str>,
    sim_serial: Option<&str>,
    secure_id: Option<&str>,
) -> Uuid {
    let h_secure = java_string_hash(secure_id.unwrap_or(NULL_TEXT));
    let h_device = java_string_hash(device_id.unwrap_or(NULL_TEXT));
    let h_sim = java_string_hash(sim_serial.unwrap_or(NULL_TEXT));

    let msb = i64::from(h_secure) as u64;
    let lsb = ((i64::from(h_device) << 32) as u64) | u64::from(h_sim as u32);

    Uuid::from_u64_pair(msb, lsb)
}

/// [`synthesize`] over present strings.
pub fn synthesize_str(device_id: &str, sim_serial: &str, secure_id: &str) -> Uuid {
    synthesize(Some(device_id), Some(sim_serial), Some(secure_id))
}
