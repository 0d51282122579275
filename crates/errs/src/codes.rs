//! Reserved return codes shared across services.
//!
//! These values travel between processes and languages, so they are part of
//! the compatibility surface and must never be renumbered.
//!
//! # Code Ranges
//!
//! | Range       | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `0`         | `RET_OK`, success                                |
//! | `1..=99`    | Server side framework failures                   |
//! | `100..=399` | Client side framework failures                   |
//! | `400..=499` | Generic request failures                         |
//! | `999`       | `RET_UNKNOWN`, error not produced by this crate |
//!
//! Business codes chosen by applications should stay outside these ranges.

/// Success.
pub const RET_OK: i32 = 0;

// ── Server side ───────────────────────────────────────────────────

/// The server failed to decode the request.
pub const RET_SERVER_DECODE_FAIL: i32 = 1;
/// The server failed to encode the response.
pub const RET_SERVER_ENCODE_FAIL: i32 = 2;
/// No service implementation matched the request.
pub const RET_SERVER_NO_SERVICE: i32 = 11;
/// No method implementation matched the request.
pub const RET_SERVER_NO_FUNC: i32 = 12;
/// The request timed out in the server queue.
pub const RET_SERVER_TIMEOUT: i32 = 21;
/// The server is overloaded.
pub const RET_SERVER_OVERLOAD: i32 = 22;
/// The server throttled the request.
pub const RET_SERVER_THROTTLED: i32 = 23;
/// The full-link deadline expired on the server.
pub const RET_SERVER_FULL_LINK_TIMEOUT: i32 = 24;
/// Internal failure of the server system.
pub const RET_SERVER_SYSTEM_ERR: i32 = 31;
/// The server rejected the caller's credentials.
pub const RET_SERVER_AUTH_FAIL: i32 = 41;
/// Automatic validation of request parameters failed.
pub const RET_SERVER_VALIDATE_FAIL: i32 = 51;

// ── Client side ───────────────────────────────────────────────────

/// The request timed out on the client.
pub const RET_CLIENT_TIMEOUT: i32 = 101;
/// The full-link deadline expired on the client.
pub const RET_CLIENT_FULL_LINK_TIMEOUT: i32 = 102;
/// The client could not connect to the server.
pub const RET_CLIENT_CONNECT_FAIL: i32 = 111;
/// The client failed to encode the request.
pub const RET_CLIENT_ENCODE_FAIL: i32 = 121;
/// The client failed to decode the response.
pub const RET_CLIENT_DECODE_FAIL: i32 = 122;
/// The client throttled the request.
pub const RET_CLIENT_THROTTLED: i32 = 123;
/// The client is overloaded.
pub const RET_CLIENT_OVERLOAD: i32 = 124;
/// The client selected a wrong route / address.
pub const RET_CLIENT_ROUTE_ERR: i32 = 131;
/// A network error occurred on the client.
pub const RET_CLIENT_NET_ERR: i32 = 141;
/// Automatic validation of response parameters failed.
pub const RET_CLIENT_VALIDATE_FAIL: i32 = 151;
/// The upstream caller cancelled the request.
pub const RET_CLIENT_CANCELED: i32 = 161;
/// The client failed to read a response frame.
pub const RET_CLIENT_READ_FRAME_ERR: i32 = 171;
/// The client stream's receive queue is full.
pub const RET_CLIENT_STREAM_QUEUE_FULL: i32 = 201;
/// The stream ended while the client was still receiving.
pub const RET_CLIENT_STREAM_READ_END: i32 = 351;

// ── Generic ───────────────────────────────────────────────────────

/// The caller supplied an invalid argument.
pub const RET_INVALID_ARGUMENT: i32 = 400;
/// A requested entity was not found.
pub const RET_NOT_FOUND: i32 = 404;

/// Unspecified error, also reported for errors foreign to this crate.
pub const RET_UNKNOWN: i32 = 999;

/// Codes that denote a timeout, on either side of the call.
pub const TIMEOUT_CODES: [i32; 4] = [
    RET_CLIENT_TIMEOUT,
    RET_CLIENT_FULL_LINK_TIMEOUT,
    RET_SERVER_TIMEOUT,
    RET_SERVER_FULL_LINK_TIMEOUT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_values_are_stable() {
        let table = [
            (RET_OK, 0),
            (RET_SERVER_DECODE_FAIL, 1),
            (RET_SERVER_ENCODE_FAIL, 2),
            (RET_SERVER_NO_SERVICE, 11),
            (RET_SERVER_NO_FUNC, 12),
            (RET_SERVER_TIMEOUT, 21),
            (RET_SERVER_OVERLOAD, 22),
            (RET_SERVER_THROTTLED, 23),
            (RET_SERVER_FULL_LINK_TIMEOUT, 24),
            (RET_SERVER_SYSTEM_ERR, 31),
            (RET_SERVER_AUTH_FAIL, 41),
            (RET_SERVER_VALIDATE_FAIL, 51),
            (RET_CLIENT_TIMEOUT, 101),
            (RET_CLIENT_FULL_LINK_TIMEOUT, 102),
            (RET_CLIENT_CONNECT_FAIL, 111),
            (RET_CLIENT_ENCODE_FAIL, 121),
            (RET_CLIENT_DECODE_FAIL, 122),
            (RET_CLIENT_THROTTLED, 123),
            (RET_CLIENT_OVERLOAD, 124),
            (RET_CLIENT_ROUTE_ERR, 131),
            (RET_CLIENT_NET_ERR, 141),
            (RET_CLIENT_VALIDATE_FAIL, 151),
            (RET_CLIENT_CANCELED, 161),
            (RET_CLIENT_READ_FRAME_ERR, 171),
            (RET_CLIENT_STREAM_QUEUE_FULL, 201),
            (RET_CLIENT_STREAM_READ_END, 351),
            (RET_INVALID_ARGUMENT, 400),
            (RET_NOT_FOUND, 404),
            (RET_UNKNOWN, 999),
        ];
        for (actual, expected) in table {
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn server_and_client_ranges() {
        assert!((1..100).contains(&RET_SERVER_VALIDATE_FAIL));
        assert!((100..400).contains(&RET_CLIENT_TIMEOUT));
        assert!((100..400).contains(&RET_CLIENT_STREAM_READ_END));
    }

    #[test]
    fn timeout_codes_are_distinct() {
        for (i, a) in TIMEOUT_CODES.iter().enumerate() {
            for b in &TIMEOUT_CODES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
