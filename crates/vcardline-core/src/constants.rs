/// Property name opening a vCard record.
pub const BEGIN: &str = "BEGIN";
/// Property name closing a vCard record.
pub const END: &str = "END";
/// Property name carrying the format version.
pub const VERSION: &str = "VERSION";
/// Value of the BEGIN/END envelope lines.
pub const VCARD: &str = "VCARD";
/// The only supported format version.
pub const VERSION_4_0: &str = "4.0";

pub const BEGIN_LINE: &str = const_str::concat!(BEGIN, ":", VCARD);
pub const VERSION_LINE: &str = const_str::concat!(VERSION, ":", VERSION_4_0);
pub const END_LINE: &str = const_str::concat!(END, ":", VCARD);

/// Maximum physical line length in octets, excluding the line break (RFC 6350 §3.2).
pub const MAX_LINE_OCTETS: usize = 75;

/// Upper bound accepted for a configured line length (RFC 5322 §2.1.1).
pub const MAX_CONFIGURABLE_LINE_OCTETS: usize = 998;

pub const CRLF: &str = "\r\n";
pub const LF: &str = "\n";
