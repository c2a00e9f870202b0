use crate::{Error, HardwareInterface, InterfaceSource, Result};

/// An `InterfaceSource` that asks the operating system.
///
/// On Linux, Android, the BSDs and Apple platforms this walks `getifaddrs(3)`
/// and keeps one entry per interface that reports a link-layer address. Other
/// targets fail with [`Error::InterfacesUnavailable`], so generator
/// construction fails there too.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemInterfaces;

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly",
))]
impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Result<Vec<HardwareInterface>> {
        use nix::{ifaddrs::getifaddrs, net::if_::InterfaceFlags};

        let addrs = getifaddrs().map_err(|errno| Error::InterfacesUnavailable {
            reason: errno.to_string(),
        })?;

        let mut found: Vec<HardwareInterface> = Vec::new();
        for ifaddr in addrs {
            let Some(mac) = ifaddr
                .address
                .as_ref()
                .and_then(|addr| addr.as_link_addr())
                .map(hardware_addr)
            else {
                continue;
            };
            // getifaddrs yields one entry per address; keep the first per name.
            if found.iter().any(|nic| nic.name == ifaddr.interface_name) {
                continue;
            }
            let is_up = ifaddr.flags.contains(InterfaceFlags::IFF_UP);
            found.push(HardwareInterface::new(ifaddr.interface_name, is_up, mac));
        }
        Ok(found)
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly",
)))]
impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Result<Vec<HardwareInterface>> {
        Err(unsupported_target())
    }
}

#[cfg_attr(
    any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly",
    ),
    allow(dead_code)
)]
fn unsupported_target() -> Error {
    Error::InterfacesUnavailable {
        reason: "interface enumeration is not supported on this target".into(),
    }
}

/// `nix` only exposes the first six address bytes; read `halen` bytes instead.
#[cfg(any(target_os = "linux", target_os = "android"))]
fn hardware_addr(link: &nix::sys::socket::LinkAddr) -> Vec<u8> {
    let ll = link.as_ref();
    link_layer_bytes(&ll.sll_addr, 0, usize::from(ll.sll_halen))
}

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly",
))]
fn hardware_addr(link: &nix::sys::socket::LinkAddr) -> Vec<u8> {
    let dl = link.as_ref();
    #[allow(clippy::cast_sign_loss)]
    let data: Vec<u8> = dl.sdl_data.iter().map(|&b| b as u8).collect();
    link_layer_bytes(&data, usize::from(dl.sdl_nlen), usize::from(dl.sdl_alen))
}

/// The `len` address bytes starting at `offset`, cut short at the end of
/// `data`.
#[cfg(any(
    test,
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly",
))]
fn link_layer_bytes(data: &[u8], offset: usize, len: usize) -> Vec<u8> {
    let rest = data.get(offset..).unwrap_or_default();
    rest[..len.min(rest.len())].to_vec()
}
