use std::fmt;

use serde::{Deserialize, Serialize};

/// Managed runtime flavor reported by the host.
///
/// `Unknown` is a terminal state, not an error: it covers every probe
/// failure and any runtime name that is neither Dalvik nor ART.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuntimeKind {
    Dalvik,
    #[serde(rename = "ART")]
    Art,
    #[default]
    Unknown,
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeKind::Dalvik => write!(f, "Dalvik"),
            RuntimeKind::Art => write!(f, "ART"),
            RuntimeKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Pixel dimensions of the default display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    /// Parses a `WIDTHxHEIGHT` mode string such as `1920x1080`.
    ///
    /// Trailing refresh or interlace suffixes (`1920x1080i`) are ignored.
    pub fn parse_mode(mode: &str) -> Option<Self> {
        let (w, h) = mode.trim().split_once('x')?;
        let h: String = h.chars().take_while(|c| c.is_ascii_digit()).collect();
        Some(Self {
            width: w.parse().ok()?,
            height: h.parse().ok()?,
        })
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One snapshot of every attribute the probe collects.
///
/// String attributes the host cannot supply are empty, never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAttributes {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub device_name: String,
    #[serde(default)]
    pub imei: String,
    #[serde(default)]
    pub mac: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<ScreenSize>,
    pub cpu_cores: usize,
    pub runtime: RuntimeKind,
    /// Raw probe value or diagnostic sentinel behind `runtime`.
    pub runtime_detail: String,
    pub unique_id: String,
    #[serde(default)]
    pub max_memory_kb: u64,
}
