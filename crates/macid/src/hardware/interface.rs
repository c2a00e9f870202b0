use crate::Result;

/// A network interface as seen while deriving a machine fingerprint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HardwareInterface {
    /// OS name of the interface, e.g. `eth0`.
    pub name: String,
    /// Whether the interface is administratively up.
    pub is_up: bool,
    /// Raw link-layer address. Empty when the interface has none.
    pub hardware_addr: Vec<u8>,
}

impl HardwareInterface {
    pub fn new(name: impl Into<String>, is_up: bool, hardware_addr: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            is_up,
            hardware_addr: hardware_addr.into(),
        }
    }

    /// Returns `true` if the interface carries a real hardware address.
    ///
    /// An all-zero address (as reported for loopback) counts as absent.
    #[must_use]
    pub fn has_hardware_addr(&self) -> bool {
        self.hardware_addr.iter().any(|&b| b != 0)
    }

    /// Formats the hardware address as lowercase, colon-separated hex pairs,
    /// e.g. `00:1a:2b:3c:4d:5e`.
    #[must_use]
    pub fn hardware_addr_string(&self) -> String {
        self.hardware_addr
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Returns `true` if this interface can seed a fingerprint.
    #[must_use]
    pub fn is_candidate(&self) -> bool {
        self.is_up && self.has_hardware_addr()
    }
}

/// A trait for sources that enumerate the host's network interfaces.
///
/// This abstraction allows you to plug in the real OS enumeration or a fixed
/// list in tests.
///
/// # Example
///
/// ```
/// use macid::{HardwareInterface, InterfaceSource};
///
/// struct OneNic;
/// impl InterfaceSource for OneNic {
///     fn interfaces(&self) -> macid::Result<Vec<HardwareInterface>> {
///         Ok(vec![HardwareInterface::new("eth0", true, [0x02, 0, 0, 0, 0, 1])])
///     }
/// }
///
/// let nics = OneNic.interfaces().unwrap();
/// assert_eq!(nics[0].hardware_addr_string(), "02:00:00:00:00:01");
/// ```
pub trait InterfaceSource {
    /// Returns every interface in the order the OS reports them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InterfacesUnavailable`](crate::Error::InterfacesUnavailable)
    /// if the interfaces cannot be enumerated at all.
    fn interfaces(&self) -> Result<Vec<HardwareInterface>>;
}

impl<S: InterfaceSource + ?Sized> InterfaceSource for &S {
    fn interfaces(&self) -> Result<Vec<HardwareInterface>> {
        (**self).interfaces()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_address_as_colon_separated_hex() {
        let nic = HardwareInterface::new("en0", true, [0xA4, 0x83, 0xe7, 0x0b, 0x1c, 0x02]);
        assert_eq!(nic.hardware_addr_string(), "a4:83:e7:0b:1c:02");
    }

    #[test]
    fn zero_or_missing_address_is_not_a_candidate() {
        assert!(!HardwareInterface::new("lo", true, [0u8; 6]).is_candidate());
        assert!(!HardwareInterface::new("tun0", true, Vec::new()).is_candidate());
        assert!(!HardwareInterface::new("eth1", false, [1u8; 6]).is_candidate());
        assert!(HardwareInterface::new("eth0", true, [0, 0, 0, 0, 0, 1]).is_candidate());
    }
}
