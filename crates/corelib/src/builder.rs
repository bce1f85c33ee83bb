//! Staging area for [`Endpoint`] construction.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use tracing::{debug, trace};

use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::network::{self, PORT_ABSENT};

/// Name of the only required field, as it appears on the wire.
pub(crate) const SERVICE_NAME: &str = "serviceName";

/// Mutable builder for an immutable [`Endpoint`].
///
/// Setters consume and return the builder so calls chain. Only [`port`]
/// can fail at the call site; the missing service name is reported by
/// [`build`].
///
/// [`port`]: EndpointBuilder::port
/// [`build`]: EndpointBuilder::build
///
/// # Example
///
/// ```rust
/// use corelib::Endpoint;
///
/// let endpoint = Endpoint::builder()
///     .service_name("Frontend")
///     .ipv4(127 << 24 | 1)
///     .port(8080)?
///     .build()?;
///
/// assert_eq!(endpoint.service_name(), "frontend");
/// # Ok::<(), corelib::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndpointBuilder {
    service_name: Option<String>,
    ipv4: u32,
    ipv6: Option<[u8; 16]>,
    port: u16,
}

impl EndpointBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service name. Stored lowercased.
    pub fn service_name(mut self, service_name: impl AsRef<str>) -> Self {
        self.service_name = Some(service_name.as_ref().to_lowercase());
        self
    }

    /// Set the packed IPv4 address. `0` leaves it absent.
    pub fn ipv4(mut self, ipv4: u32) -> Self {
        self.ipv4 = ipv4;
        self
    }

    /// Set the IPv6 address from raw octets.
    pub fn ipv6(mut self, ipv6: [u8; 16]) -> Self {
        self.ipv6 = Some(ipv6);
        self
    }

    pub fn ipv4_addr(self, addr: Ipv4Addr) -> Self {
        self.ipv4(network::pack_ipv4(addr))
    }

    pub fn ipv6_addr(self, addr: Ipv6Addr) -> Self {
        self.ipv6(addr.octets())
    }

    /// Route an address into the slot matching its family.
    ///
    /// The other family's slot is left untouched, so both may be set by
    /// calling this twice.
    pub fn ip(self, addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => self.ipv4_addr(v4),
            IpAddr::V6(v6) => self.ipv6_addr(v6),
        }
    }

    /// Set the port.
    ///
    /// `0` clears the port. Values outside `0..=65535` fail immediately with
    /// [`Error::InvalidPort`].
    pub fn port(mut self, port: i32) -> Result<Self> {
        self.port = network::coerce_port(i64::from(port)).inspect_err(|err| {
            debug!(port, %err, "rejected endpoint port");
        })?;
        Ok(self)
    }

    /// Validate the staged fields and produce an [`Endpoint`].
    ///
    /// The builder is left intact and may be reused.
    pub fn build(&self) -> Result<Endpoint> {
        let Some(service_name) = self.service_name.clone() else {
            debug!("endpoint built without {}", SERVICE_NAME);
            return Err(Error::MissingField(SERVICE_NAME));
        };

        let endpoint = Endpoint::from_parts(service_name, self.ipv4, self.ipv6, self.port);
        trace!(%endpoint, "built endpoint");
        Ok(endpoint)
    }
}

impl From<&Endpoint> for EndpointBuilder {
    fn from(endpoint: &Endpoint) -> Self {
        Self {
            service_name: Some(endpoint.service_name().to_owned()),
            ipv4: endpoint.ipv4(),
            ipv6: endpoint.ipv6(),
            port: endpoint.port().unwrap_or(PORT_ABSENT),
        }
    }
}
