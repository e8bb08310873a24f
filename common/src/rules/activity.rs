/// Columns an activity export must carry.
pub const ACTIVITY_COLUMNS: [&str; 7] = [
    "ImageFileName",
    "Protocol",
    "RemoteAddress",
    "RemotePort",
    "LocalPort",
    "ConnectionDirection",
    "CommandLine",
];

/// One connection from a firewall activity export, fields as exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityRow {
    pub image_file_name: String,
    pub protocol: String,
    pub remote_address: String,
    pub remote_port: String,
    pub local_port: String,
    pub connection_direction: String,
    pub command_line: String,
}
