//! Conversion between the two textual TON address forms.
//!
//! A raw address is `workchain:hex-key` (signed one-byte workchain id and a
//! 32-byte account key as 64 lowercase hex chars). The user-friendly form
//! packs a tag byte, the workchain byte and the key into 34 bytes, appends a
//! big-endian CRC-16/XMODEM checksum of those 34 bytes, and base64url-encodes
//! the resulting 36 bytes into 48 characters.
//!
//! The tag byte carries delivery semantics: `0x11` for bounceable, `0x51` for
//! non-bounceable. Testnet-only addresses additionally set the high bit; the
//! decoder accepts them, the encoder never produces them. The raw form has no
//! room for either hint, so the round trip is lossy in that direction by
//! design.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig};

use crate::error::{Result, TonApiError};

/// Tag byte for bounceable addresses.
const BOUNCEABLE_TAG: u8 = 0x11;

/// Tag byte for non-bounceable addresses.
const NON_BOUNCEABLE_TAG: u8 = 0x51;

/// High bit set on the tag byte of testnet-only addresses.
const TEST_ONLY_FLAG: u8 = 0x80;

/// Payload length before the checksum: tag + workchain + 32-byte key.
const PAYLOAD_LEN: usize = 34;

/// Full decoded length: payload + 2-byte checksum.
const ENCODED_LEN: usize = 36;

/// URL-safe base64 that decodes both padded and unpadded input. Encoding a
/// 36-byte buffer never needs padding, but wallets disagree on whether to
/// keep it when relaying addresses.
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// ============================================================================
// CRC-16/XMODEM
// ============================================================================

/// CRC-16/XMODEM: polynomial `0x1021`, initial value 0, no reflection,
/// no final XOR.
#[must_use]
pub(crate) fn crc16_xmodem(payload: &[u8]) -> u16 {
    const POLY: u16 = 0x1021;
    let mut crc: u16 = 0;

    for byte in payload {
        crc ^= u16::from(*byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }

    crc
}

// ============================================================================
// Conversions
// ============================================================================

/// Converts a raw address string to the user-friendly format.
///
/// # Errors
///
/// Returns [`TonApiError::InvalidInput`] if the input is not of the form
/// `workchain:hex-key` with a one-byte signed workchain id and exactly
/// 64 hex characters of key.
pub fn raw_to_userfriendly(address: &str, bounceable: bool) -> Result<String> {
    let (workchain, key_hex) = address
        .split_once(':')
        .ok_or_else(|| TonApiError::invalid_input("raw address must be 'workchain:key'"))?;

    let workchain: i8 = workchain.parse().map_err(|_| {
        TonApiError::invalid_input(format!("workchain id '{workchain}' is not a signed byte"))
    })?;

    if key_hex.len() != 64 {
        return Err(TonApiError::invalid_input(format!(
            "account key must be 64 hex characters, got {}",
            key_hex.len()
        )));
    }
    let key = hex::decode(key_hex)
        .map_err(|_| TonApiError::invalid_input("account key is not valid hex"))?;

    let tag = if bounceable {
        BOUNCEABLE_TAG
    } else {
        NON_BOUNCEABLE_TAG
    };

    let mut buffer = Vec::with_capacity(ENCODED_LEN);
    buffer.push(tag);
    buffer.push(workchain as u8);
    buffer.extend_from_slice(&key);
    let crc = crc16_xmodem(&buffer);
    buffer.extend_from_slice(&crc.to_be_bytes());

    Ok(BASE64_URL.encode(&buffer))
}

/// Converts a user-friendly address back to its raw format.
///
/// The checksum and the tag byte are verified; the bounceable and
/// testnet-only hints are discarded. Key hex in the output is canonical
/// lowercase.
///
/// # Errors
///
/// Returns [`TonApiError::InvalidInput`] if the input is not valid base64url,
/// does not decode to exactly 36 bytes, carries an unknown tag byte, or fails
/// the checksum.
pub fn userfriendly_to_raw(address: &str) -> Result<String> {
    let decoded = BASE64_URL
        .decode(address.trim())
        .map_err(|_| TonApiError::invalid_input("address is not valid base64url"))?;

    if decoded.len() != ENCODED_LEN {
        return Err(TonApiError::invalid_input(format!(
            "address must decode to {ENCODED_LEN} bytes, got {}",
            decoded.len()
        )));
    }

    let tag = decoded[0] & !TEST_ONLY_FLAG;
    if tag != BOUNCEABLE_TAG && tag != NON_BOUNCEABLE_TAG {
        return Err(TonApiError::invalid_input(format!(
            "unknown address tag byte 0x{:02x}",
            decoded[0]
        )));
    }

    let expected = crc16_xmodem(&decoded[..PAYLOAD_LEN]);
    let actual = u16::from_be_bytes([decoded[PAYLOAD_LEN], decoded[PAYLOAD_LEN + 1]]);
    if expected != actual {
        return Err(TonApiError::invalid_input(
            "address checksum mismatch".to_string(),
        ));
    }

    let workchain = decoded[1] as i8;
    let key = hex::encode(&decoded[2..PAYLOAD_LEN]);

    Ok(format!("{workchain}:{key}"))
}

// ============================================================================
// Tests
// ============================================================================
