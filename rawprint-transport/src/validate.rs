//! Connection parameter validation
//!
//! Printers live on fixed LAN addresses, so the address check is a strict
//! IPv4 dotted quad rather than a general host lookup: exactly four
//! groups, each one to three digits, each in 0..=255. Leading zeros are
//! tolerated ("010" reads as 10), matching what printer config pages
//! typically display.

use crate::error::{Error, Result};

fn is_valid_octet(group: &str) -> bool {
    if group.is_empty() || group.len() > 3 {
        return false;
    }
    if !group.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // 3 ASCII digits always fit in u16
    group.parse::<u16>().is_ok_and(|v| v <= 255)
}

/// Check a string against the strict dotted-quad form
pub fn is_valid_ipv4(addr: &str) -> bool {
    let mut groups = 0;
    for part in addr.split('.') {
        if !is_valid_octet(part) {
            return false;
        }
        groups += 1;
    }
    groups == 4
}

/// Validate a printer address, or report `InvalidAddress`
pub fn validate_address(addr: &str) -> Result<()> {
    if is_valid_ipv4(addr) {
        Ok(())
    } else {
        Err(Error::InvalidAddress(addr.to_string()))
    }
}

/// Validate a printer port, or report `InvalidPort`.
///
/// The type already rules out anything above 65535; zero is the one
/// representable value a TCP connect can never use.
pub fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        Err(Error::InvalidPort(port))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_addresses() {
        for addr in [
            "192.168.1.50",
            "0.0.0.0",
            "255.255.255.255",
            "10.0.0.1",
            "1.2.3.4",
            "01.02.003.004", // leading zeros tolerated
        ] {
            assert!(is_valid_ipv4(addr), "should accept {addr}");
        }
    }

    #[test]
    fn test_rejects_out_of_range_octets() {
        for addr in ["192.168.1.999", "256.1.1.1", "1.1.300.1"] {
            assert!(!is_valid_ipv4(addr), "should reject {addr}");
        }
    }

    #[test]
    fn test_rejects_wrong_group_count() {
        for addr in ["1.2.3", "1.2.3.4.5", "1", ""] {
            assert!(!is_valid_ipv4(addr), "should reject {addr}");
        }
    }

    #[test]
    fn test_rejects_malformed_groups() {
        for addr in [
            "192.168.1.",
            ".192.168.1.1",
            "192.168..1",
            "a.b.c.d",
            "192.168.1.1a",
            "192.168.1.0001",
            " 192.168.1.1",
            "192,168,1,1",
        ] {
            assert!(!is_valid_ipv4(addr), "should reject {addr:?}");
        }
    }

    #[test]
    fn test_validate_address_error() {
        assert!(validate_address("192.168.1.100").is_ok());
        assert!(matches!(
            validate_address("printer.local"),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_port_bounds() {
        assert!(matches!(validate_port(0), Err(Error::InvalidPort(0))));
        assert!(validate_port(1).is_ok());
        assert!(validate_port(9100).is_ok());
        assert!(validate_port(65535).is_ok());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn all_in_range_quads_accepted(a in 0u16..=255, b in 0u16..=255, c in 0u16..=255, d in 0u16..=255) {
                let addr = format!("{}.{}.{}.{}", a, b, c, d);
                prop_assert!(is_valid_ipv4(&addr));
            }

            #[test]
            fn out_of_range_last_octet_rejected(a in 0u16..=255, b in 0u16..=255, c in 0u16..=255, d in 256u16..=999) {
                let addr = format!("{}.{}.{}.{}", a, b, c, d);
                prop_assert!(!is_valid_ipv4(&addr));
            }

            #[test]
            fn nonzero_ports_accepted(port in 1u16..=65535) {
                prop_assert!(validate_port(port).is_ok());
            }
        }
    }
}
