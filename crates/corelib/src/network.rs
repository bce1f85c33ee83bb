//! Address and port representations shared by endpoint construction and
//! serialization.
//!
//! Endpoints store addresses in their compact wire form: IPv4 as a packed
//! big-endian `u32` where `0` doubles as "absent", IPv6 as raw octets, and the
//! port as the low 16 bits with `0` meaning "absent".

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::{Error, Result};

/// Packed value used for an unset IPv4 address.
pub const IPV4_ABSENT: u32 = 0;

/// Stored port bits for an unset port.
pub const PORT_ABSENT: u16 = 0;

/// Pack four octets into the `u32` the endpoint stores.
#[inline]
pub fn pack_ipv4(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// Unpack a stored IPv4 value, treating the absent sentinel as `None`.
#[inline]
pub fn unpack_ipv4(bits: u32) -> Option<Ipv4Addr> {
    (bits != IPV4_ABSENT).then(|| Ipv4Addr::from(bits))
}

#[inline]
pub fn unpack_ipv6(octets: [u8; 16]) -> Ipv6Addr {
    Ipv6Addr::from(octets)
}

/// Coerce a caller-supplied port into stored bits.
///
/// `0` maps to [`PORT_ABSENT`]. Anything outside `0..=65535` is rejected with
/// the caller's literal rather than truncated.
pub fn coerce_port(value: i64) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::InvalidPort(value))
}

/// Reinterpret stored port bits as the signed 16-bit value older consumers
/// read. `65535` and `-1` are the same bits.
#[inline]
pub fn port_as_signed(bits: u16) -> i16 {
    bits as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_packing() {
        let addr = Ipv4Addr::new(127, 0, 0, 1);
        assert_eq!(pack_ipv4(addr), 127 << 24 | 1);
        assert_eq!(unpack_ipv4(127 << 24 | 1), Some(addr));
    }

    #[test]
    fn test_ipv4_zero_is_absent() {
        assert_eq!(unpack_ipv4(0), None);
        assert_eq!(pack_ipv4(Ipv4Addr::UNSPECIFIED), IPV4_ABSENT);
    }

    #[test]
    fn test_coerce_port_bounds() {
        assert_eq!(coerce_port(0).unwrap(), PORT_ABSENT);
        assert_eq!(coerce_port(1).unwrap(), 1);
        assert_eq!(coerce_port(65535).unwrap(), u16::MAX);
        assert_eq!(coerce_port(-1).unwrap_err().to_string(), "invalid port -1");
        assert_eq!(
            coerce_port(65536).unwrap_err().to_string(),
            "invalid port 65536"
        );
    }

    #[test]
    fn test_port_sign_duality() {
        assert_eq!(port_as_signed(65535), -1);
        assert_eq!(port_as_signed(80), 80);
        assert_eq!(port_as_signed(32768), i16::MIN);
    }
}
