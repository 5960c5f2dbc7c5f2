// Minimal big-endian RLP integer codec, enough to read and write the leading
// cmd_id field of a message. Canonical encodings only; trailing bytes are
// ignored so callers can hand in a whole framed message.
use crate::core::error::{Error, ErrorKind};

const SINGLE_BYTE_MAX: u8 = 0x7f;
const SHORT_BASE: u8 = 0x80;
const LONG_BASE: u8 = 0xb7;
const SHORT_MAX_LEN: u64 = 55;
const UINT_WIDTH: usize = 8;

/// Decode the first RLP item of `input` as an unsigned integer.
pub fn decode_uint(input: &[u8]) -> Result<u64, Error> {
    let Some(&prefix) = input.first() else {
        return Err(Error::new(ErrorKind::Corrupt)
            .with_message("empty input, expected an encoded integer"));
    };

    match prefix {
        0x00 => Err(Error::new(ErrorKind::Corrupt)
            .with_message("raw zero byte (zero encodes as an empty payload)")
            .with_offset(0)),
        0x01..=0x7f => Ok(u64::from(prefix)),
        0x80 => Ok(0),
        0x81..=0xb7 => {
            let len = usize::from(prefix - SHORT_BASE);
            let payload = input.get(1..1 + len).ok_or_else(|| {
                Error::new(ErrorKind::Corrupt)
                    .with_message(format!(
                        "truncated integer payload ({} of {len} bytes)",
                        input.len() - 1
                    ))
                    .with_offset(input.len())
            })?;
            if payload[0] == 0 {
                return Err(Error::new(ErrorKind::Corrupt)
                    .with_message("leading zero in integer payload")
                    .with_offset(1));
            }
            if len == 1 && payload[0] <= SINGLE_BYTE_MAX {
                return Err(Error::new(ErrorKind::Corrupt)
                    .with_message("single-byte value must be encoded as itself")
                    .with_offset(1));
            }
            if len > UINT_WIDTH {
                return Err(Error::new(ErrorKind::Corrupt)
                    .with_message(format!("integer payload is {len} bytes, wider than u64"))
                    .with_offset(0));
            }
            Ok(payload
                .iter()
                .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte)))
        }
        0xb8..=0xbf => {
            // Validate the long-form length for a precise error; any payload
            // that legitimately needs it is wider than u64 anyway.
            let len_width = usize::from(prefix - LONG_BASE);
            let len_bytes = input.get(1..1 + len_width).ok_or_else(|| {
                Error::new(ErrorKind::Corrupt)
                    .with_message("truncated length prefix")
                    .with_offset(input.len())
            })?;
            if len_bytes[0] == 0 {
                return Err(Error::new(ErrorKind::Corrupt)
                    .with_message("leading zero in length prefix")
                    .with_offset(1));
            }
            let len = len_bytes
                .iter()
                .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
            if len <= SHORT_MAX_LEN {
                return Err(Error::new(ErrorKind::Corrupt)
                    .with_message("long-form length used for a short payload")
                    .with_offset(0));
            }
            Err(Error::new(ErrorKind::Corrupt)
                .with_message(format!("integer payload is {len} bytes, wider than u64"))
                .with_offset(0))
        }
        0xc0..=0xff => Err(Error::new(ErrorKind::Corrupt)
            .with_message("expected an integer, found a list")
            .with_offset(0)),
    }
}

/// Encode `value` as a canonical minimal-length RLP integer.
pub fn encode_uint(value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![SHORT_BASE];
    }
    if value <= u64::from(SINGLE_BYTE_MAX) {
        return vec![value as u8];
    }
    let be = value.to_be_bytes();
    let skip = be.iter().take_while(|byte| **byte == 0).count();
    let payload = &be[skip..];
    let mut out = Vec::with_capacity(1 + payload.len());
    out.push(SHORT_BASE + payload.len() as u8);
    out.extend_from_slice(payload);
    out
}

/// Return the cmd_id of a framed message.
///
/// The cmd_id, also known as the payload type, is always the first entry of
/// the message, interpreted as an integer. The rest of the message is left
/// for the protocol layer to decode.
pub fn cmd_id(msg: &[u8]) -> Result<u64, Error> {
    decode_uint(msg)
}
