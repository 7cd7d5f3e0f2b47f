//! Identifier minting helpers

use bech32::Bech32m;
use uuid7::uuid7;

// construct a fresh uuid then encode using bech32
pub fn new_uuid_to_bech32(hrp: &str) -> anyhow::Result<String> {
    let hrp = bech32::Hrp::parse(hrp)?;
    let encode = bech32::encode::<Bech32m>(hrp, uuid7().as_bytes())?;
    Ok(encode)
}

/// Mint a surrogate request id (`req1...`). The id is assigned once at
/// submission and never changes, so review operations target a stable key
/// rather than a row offset.
pub fn new_request_id() -> String {
    new_uuid_to_bech32("req").expect("fixed hrp and 16-byte payload always encode")
}
