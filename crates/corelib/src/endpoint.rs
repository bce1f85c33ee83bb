//! The endpoint value carried on spans.
//!
//! An [`Endpoint`] names the service, address and port on one side of a traced
//! operation. Values are only produced by [`EndpointBuilder::build`] and never
//! change afterwards, so they can be shared across threads freely.
//!
//! # Canonical JSON
//!
//! `Display`, [`Endpoint::to_json`] and the `Serialize` impl all produce the
//! same string, with fields in a fixed order and absent fields omitted:
//!
//! ```text
//! {"serviceName":"foo","ipv4":"127.0.0.1","ipv6":"2001:db8::c001","port":80}
//! ```
//!
//! # Zero sentinels
//!
//! An IPv4 of `0` and a port of `0` both mean "absent". `0.0.0.0` and port
//! zero cannot be represented; readers of the wire form rely on this.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::builder::{EndpointBuilder, SERVICE_NAME};
use crate::error::{Error, Result};
use crate::network::{self, IPV4_ABSENT, PORT_ABSENT};

/// One network-addressable participant in a trace.
///
/// Equality and hashing compare all four stored fields bit for bit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "EndpointJson")]
pub struct Endpoint {
    service_name: String,
    ipv4: u32,
    ipv6: Option<[u8; 16]>,
    port: u16,
}

impl Endpoint {
    /// Start building an endpoint.
    pub fn builder() -> EndpointBuilder {
        EndpointBuilder::new()
    }

    /// Shorthand for the common service/ipv4/port chain.
    ///
    /// Fails exactly as the builder would.
    pub fn create(service_name: impl AsRef<str>, ipv4: u32, port: i32) -> Result<Self> {
        Self::builder()
            .service_name(service_name)
            .ipv4(ipv4)
            .port(port)?
            .build()
    }

    /// Builder seeded with this endpoint's fields.
    pub fn to_builder(&self) -> EndpointBuilder {
        EndpointBuilder::from(self)
    }

    /// Assemble already-validated parts. Only the builder calls this.
    pub(crate) fn from_parts(
        service_name: String,
        ipv4: u32,
        ipv6: Option<[u8; 16]>,
        port: u16,
    ) -> Self {
        Self {
            service_name,
            ipv4,
            ipv6,
            port,
        }
    }

    /// Lowercase service name; never empty on a built value.
    #[inline]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Packed IPv4 address, `0` when absent.
    #[inline]
    pub fn ipv4(&self) -> u32 {
        self.ipv4
    }

    #[inline]
    pub fn ipv4_addr(&self) -> Option<Ipv4Addr> {
        network::unpack_ipv4(self.ipv4)
    }

    #[inline]
    pub fn ipv6(&self) -> Option<[u8; 16]> {
        self.ipv6
    }

    #[inline]
    pub fn ipv6_addr(&self) -> Option<Ipv6Addr> {
        self.ipv6.map(network::unpack_ipv6)
    }

    /// Port read as unsigned, `None` when absent.
    ///
    /// This is the canonical reading and the one serialized.
    #[inline]
    pub fn port(&self) -> Option<u16> {
        (self.port != PORT_ABSENT).then_some(self.port)
    }

    /// Port read as signed 16-bit. Same bits as [`port`](Self::port), so
    /// `65535` reads back as `-1`.
    #[inline]
    pub fn port_signed(&self) -> Option<i16> {
        self.port().map(network::port_as_signed)
    }

    /// Canonical JSON form.
    pub fn to_json(&self) -> String {
        self.to_string()
    }

    /// Read the canonical JSON form back, applying the builder's rules.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ipv4 = self.ipv4_addr();
        let ipv6 = self.ipv6_addr();
        let port = self.port();
        let len = 1 + ipv4.is_some() as usize + ipv6.is_some() as usize + port.is_some() as usize;

        // Field order is part of the wire format.
        let mut state = serializer.serialize_struct("Endpoint", len)?;
        state.serialize_field(SERVICE_NAME, &self.service_name)?;
        match ipv4 {
            Some(ipv4) => state.serialize_field("ipv4", &ipv4)?,
            None => state.skip_field("ipv4")?,
        }
        match ipv6 {
            Some(ipv6) => state.serialize_field("ipv6", &ipv6)?,
            None => state.skip_field("ipv6")?,
        }
        match port {
            Some(port) => state.serialize_field("port", &port)?,
            None => state.skip_field("port")?,
        }
        state.end()
    }
}

/// Wire shape accepted when decoding. Every field goes back through the
/// builder, so decoded values obey the same invariants as built ones.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EndpointJson {
    #[serde(rename = "serviceName")]
    service_name: Option<String>,
    ipv4: Option<Ipv4Addr>,
    ipv6: Option<Ipv6Addr>,
    port: Option<i32>,
}

impl TryFrom<EndpointJson> for Endpoint {
    type Error = Error;

    fn try_from(json: EndpointJson) -> Result<Self> {
        let mut builder = Endpoint::builder()
            .ipv4(json.ipv4.map_or(IPV4_ABSENT, network::pack_ipv4))
            .port(json.port.unwrap_or(0))?;
        if let Some(service_name) = json.service_name {
            builder = builder.service_name(service_name);
        }
        if let Some(ipv6) = json.ipv6 {
            builder = builder.ipv6_addr(ipv6);
        }
        builder.build()
    }
}
