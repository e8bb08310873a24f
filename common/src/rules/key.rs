use std::fmt;

/// Direction of a summary table, and with it the name of its port column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortField {
    /// Connections accepted by the host, keyed by `LocalPort`.
    Inbound,
    /// Connections made by the host, keyed by `RemotePort`.
    Outbound,
}

impl PortField {
    pub fn column(self) -> &'static str {
        match self {
            PortField::Inbound => "LocalPort",
            PortField::Outbound => "RemotePort",
        }
    }

    /// Maps an activity export `ConnectionDirection` value (`0` or `1`).
    pub fn from_direction(direction: &str) -> Option<Self> {
        match direction.trim() {
            "0" => Some(PortField::Outbound),
            "1" => Some(PortField::Inbound),
            _ => None,
        }
    }

    /// Picks the port field from a table header. Exactly one port column must be present.
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let (mut local, mut remote) = (false, false);
        for header in headers {
            match header {
                "LocalPort" => local = true,
                "RemotePort" => remote = true,
                _ => {}
            }
        }
        match (local, remote) {
            (true, false) => Some(PortField::Inbound),
            (false, true) => Some(PortField::Outbound),
            _ => None,
        }
    }
}

impl fmt::Display for PortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortField::Inbound => write!(f, "Inbound"),
            PortField::Outbound => write!(f, "Outbound"),
        }
    }
}

/// Identity of a firewall rule: which program talks over which protocol and port.
///
/// Field order is the sort order of every table the workspace writes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleKey {
    pub executable: String,
    pub protocol: String,
    pub port: String,
    pub service: String,
}

impl RuleKey {
    pub fn new(
        executable: impl Into<String>,
        protocol: impl Into<String>,
        port: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            executable: executable.into(),
            protocol: protocol.into(),
            port: port.into(),
            service: service.into(),
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.executable, self.protocol, self.port)?;
        if !self.service.is_empty() {
            write!(f, " ({})", self.service)?;
        }
        Ok(())
    }
}
