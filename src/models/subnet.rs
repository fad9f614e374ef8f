//! Subnet data model.

use super::AddressBlock;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Caller supplied metadata. Never influences address fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SubnetMeta {
    /// Free text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display color, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SubnetMeta {
    pub fn is_empty(&self) -> bool {
        self.description.as_deref().unwrap_or("").is_empty()
            && self.color.as_deref().unwrap_or("").is_empty()
    }
}

/// Parsed input record, as produced by the text and JSON import adapters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRecord {
    pub cidr: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl SubnetRecord {
    pub fn new(cidr: &str) -> SubnetRecord {
        SubnetRecord {
            cidr: cidr.to_string(),
            description: None,
            color: None,
        }
    }
}

/// A partition element: an address block with metadata and display fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    /// CIDR block, always canonical.
    pub cidr: AddressBlock,
    #[serde(flatten)]
    pub meta: SubnetMeta,
    /// Set on synthesised blocks and refreshed by `mark_joinable`.
    pub is_joinable: bool,
    /// Dotted quad subnet mask.
    pub netmask: String,
    /// "start - end".
    pub range: String,
    /// "first - last" usable address, "None" for /31 and /32.
    pub usable_ips: String,
    /// Number of addresses in the block.
    pub hosts: u64,
}

impl Subnet {
    /// Build an enriched subnet from a block and its metadata.
    pub fn new(cidr: AddressBlock, meta: SubnetMeta) -> Subnet {
        let usable_ips = match cidr.usable_range() {
            Some((first, last)) => format!("{first} - {last}"),
            None => "None".to_string(),
        };
        Subnet {
            cidr,
            meta,
            is_joinable: false,
            netmask: cidr.netmask().to_string(),
            range: format!("{} - {}", cidr.lo(), cidr.hi()),
            usable_ips,
            hosts: cidr.host_count(),
        }
    }

    /// A block created by the partition core: empty metadata, joinable.
    pub fn synthetic(cidr: AddressBlock) -> Subnet {
        let mut subnet = Subnet::new(cidr, SubnetMeta::default());
        subnet.is_joinable = true;
        subnet
    }

    /// Parse and validate an input record.
    pub fn from_record(record: &SubnetRecord) -> Result<Subnet> {
        let cidr = AddressBlock::parse(&record.cidr)?;
        Ok(Subnet::new(
            cidr,
            SubnetMeta {
                description: record.description.clone(),
                color: record.color.clone(),
            },
        ))
    }

    /// Parse a bare CIDR string with no metadata.
    pub fn parse(cidr: &str) -> Result<Subnet> {
        Subnet::from_record(&SubnetRecord::new(cidr))
    }

    pub fn description(&self) -> &str {
        self.meta.description.as_deref().unwrap_or("")
    }

    pub fn color(&self) -> &str {
        self.meta.color.as_deref().unwrap_or("")
    }

    /// Back to the input shape, e.g. for export.
    pub fn to_record(&self) -> SubnetRecord {
        SubnetRecord {
            cidr: self.cidr.to_string(),
            description: self.meta.description.clone(),
            color: self.meta.color.clone(),
        }
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.description() {
            "" => write!(f, "{}", self.cidr),
            desc => write!(f, "{} {}", self.cidr, desc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_display_fields() {
        let s = Subnet::parse("192.168.0.0/17").unwrap();
        assert_eq!(s.netmask, "255.255.128.0");
        assert_eq!(s.range, "192.168.0.0 - 192.168.127.255");
        assert_eq!(s.usable_ips, "192.168.0.1 - 192.168.127.254");
        assert_eq!(s.hosts, 32768);
        assert!(!s.is_joinable);
        assert!(s.meta.is_empty());
    }

    #[test]
    fn test_subnet_host_route() {
        let s = Subnet::parse("10.0.0.1/32").unwrap();
        assert_eq!(s.usable_ips, "None");
        assert_eq!(s.hosts, 1);
        assert_eq!(s.range, "10.0.0.1 - 10.0.0.1");
    }

    #[test]
    fn test_subnet_from_record() {
        let record = SubnetRecord {
            cidr: "10.100.9.0/28".to_string(),
            description: Some("flow-redis".to_string()),
            color: Some("#ff0000".to_string()),
        };
        let s = Subnet::from_record(&record).unwrap();
        assert_eq!(s.description(), "flow-redis");
        assert_eq!(s.color(), "#ff0000");
        assert_eq!(s.to_string(), "10.100.9.0/28 flow-redis");
        assert_eq!(s.to_record(), record);

        assert!(Subnet::from_record(&SubnetRecord::new("10.0.0.0/33")).is_err());
    }

    #[test]
    fn test_subnet_synthetic() {
        let s = Subnet::synthetic(AddressBlock::parse("10.0.0.0/24").unwrap());
        assert!(s.is_joinable);
        assert_eq!(s.description(), "");
        assert_eq!(s.color(), "");
    }

    #[test]
    fn test_subnet_json() {
        let s = Subnet::from_record(&SubnetRecord {
            cidr: "10.0.0.0/30".to_string(),
            description: Some("p2p".to_string()),
            color: None,
        })
        .unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["cidr"], "10.0.0.0/30");
        assert_eq!(json["description"], "p2p");
        assert_eq!(json["usable_ips"], "10.0.0.1 - 10.0.0.2");
        assert!(json.get("color").is_none());
    }
}
