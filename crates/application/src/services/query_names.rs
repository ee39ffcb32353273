use ferrous_resolv_domain::ResolveError;
use std::net::IpAddr;

/// Owner names for reverse, SRV and TLSA queries.
const TLSA_PROTOCOLS: &[&str] = &["tcp", "udp", "sctp"];

/// (protocol, service, port)
const WELL_KNOWN_SERVICES: &[(&str, &str, u16)] = &[
    ("tcp", "ftp", 21),
    ("tcp", "ssh", 22),
    ("tcp", "telnet", 23),
    ("tcp", "smtp", 25),
    ("tcp", "gopher", 70),
    ("tcp", "http", 80),
    ("tcp", "pop3", 110),
    ("tcp", "imap2", 143),
    ("tcp", "imap3", 220),
    ("tcp", "https", 443),
    ("tcp", "submissions", 465),
    ("tcp", "submission", 587),
    ("tcp", "ftps", 990),
    ("tcp", "imaps", 993),
    ("tcp", "pop3s", 995),
    ("udp", "domain", 53),
];

pub struct QueryNames;

impl QueryNames {
    /// The `in-addr.arpa.` or `ip6.arpa.` name for an address.
    pub fn reverse(ip: &IpAddr) -> String {
        match ip {
            IpAddr::V4(ipv4) => {
                let octets = ipv4.octets();
                format!(
                    "{}.{}.{}.{}.in-addr.arpa.",
                    octets[3], octets[2], octets[1], octets[0]
                )
            }
            IpAddr::V6(ipv6) => {
                let mut nibbles = Vec::with_capacity(32);
                for byte in ipv6.octets().iter().rev() {
                    nibbles.push(format!("{:x}", byte & 0x0f));
                    nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
                }
                format!("{}.ip6.arpa.", nibbles.join("."))
            }
        }
    }

    pub fn reverse_from_str(addr: &str) -> Result<String, ResolveError> {
        let ip: IpAddr = addr
            .parse()
            .map_err(|_| ResolveError::InvalidAddress(addr.to_string()))?;
        Ok(Self::reverse(&ip))
    }

    /// `_service._proto.name` per RFC 2782, or `name` itself when both
    /// service and proto are empty.
    pub fn srv(service: &str, proto: &str, name: &str) -> String {
        if service.is_empty() && proto.is_empty() {
            return name.to_string();
        }
        format!("_{}._{}.{}", service, proto, name)
    }

    /// `_port._proto.name` per RFC 6698.
    ///
    /// `port` is a nonzero decimal port or a well-known service name such
    /// as `https`. `proto` must be a TLSA transport and `name` absolute.
    pub fn tlsa(port: &str, proto: &str, name: &str) -> Result<String, ResolveError> {
        if port.is_empty() || proto.is_empty() || name.is_empty() {
            return Err(ResolveError::NameConstruction(format!(
                "TLSA name needs port, protocol and name (got '{}', '{}', '{}')",
                port, proto, name
            )));
        }

        let proto = proto.to_ascii_lowercase();
        if !TLSA_PROTOCOLS.contains(&proto.as_str()) {
            return Err(ResolveError::NameConstruction(format!(
                "unsupported protocol '{}'",
                proto
            )));
        }

        let port_number = Self::service_port(port, &proto)
            .filter(|p| *p != 0)
            .ok_or_else(|| ResolveError::NameConstruction(format!("invalid port '{}'", port)))?;

        if !name.ends_with('.') {
            return Err(ResolveError::NameConstruction(format!(
                "'{}' is not fully qualified",
                name
            )));
        }

        let name = if name == "." { "" } else { name };
        Ok(format!("_{}._{}.{}", port_number, proto, name))
    }

    fn service_port(port: &str, proto: &str) -> Option<u16> {
        if let Ok(number) = port.parse::<u16>() {
            return Some(number);
        }
        let service = port.to_ascii_lowercase();
        WELL_KNOWN_SERVICES
            .iter()
            .find(|(p, s, _)| *p == proto && *s == service)
            .map(|(_, _, number)| *number)
    }
}
