use serde::{Deserialize, Serialize};

/// A monitored host as returned by `host.get`.
///
/// Zabbix serializes every field as a string regardless of its logical
/// type, so these stay `String` and conversion is left to the caller.
/// Unlisted properties can be recovered by deserializing into
/// `serde_json::Value` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Host {
    pub hostid: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

/// One history sample as returned by `history.get`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub itemid: String,
    /// Unix timestamp, seconds.
    #[serde(default)]
    pub clock: String,
    #[serde(default)]
    pub value: String,
    /// Nanosecond part of the timestamp.
    #[serde(default)]
    pub ns: String,
}

/// Ids acknowledged by `item.update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdateResult {
    #[serde(default)]
    pub itemids: Vec<String>,
}

/// Ids acknowledged by `discoveryrule.update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryRuleUpdateResult {
    #[serde(default)]
    pub ruleids: Vec<String>,
}
