use super::{InvalidInput, TagSet, classify::classify};
use serde::{Deserialize, Deserializer, Serialize};
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};
use uasniff_error::OpaqueError;
use uasniff_utils::macros::match_ignore_ascii_case_str;

/// Classification of a User Agent (UA) string.
///
/// Created using [`Classification::new`], which runs the classification
/// rules once on the given agent string. The result is immutable.
///
/// See [the crate level documentation](crate) for more information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    agent: Arc<str>,
    tags: TagSet,
    capabilities: Capabilities,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.agent)
    }
}

impl Classification {
    /// Classify a user agent string.
    pub fn new(agent: impl Into<Arc<str>>) -> Self {
        let agent = agent.into();
        let (tags, capabilities) = classify(&agent);
        Self {
            agent,
            tags,
            capabilities,
        }
    }

    /// Classify a user agent string which might be absent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if no agent string is given.
    /// An empty agent string is valid.
    pub fn try_new<S>(agent: Option<S>) -> Result<Self, InvalidInput>
    where
        S: Into<Arc<str>>,
    {
        agent.map(Self::new).ok_or(InvalidInput)
    }

    /// returns the agent string as it was classified.
    #[must_use]
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// returns the tags found for the agent, in the order they were found.
    #[must_use]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// returns `true` if the given tag was found for the agent.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[must_use]
    pub fn device(&self) -> DeviceKind {
        self.capabilities.device
    }

    /// returns `false` only for bots.
    #[must_use]
    pub fn is_browser(&self) -> bool {
        self.capabilities.is_browser
    }

    /// returns `true` if the agent can follow `tel:` links.
    #[must_use]
    pub fn supports_tel_protocol(&self) -> bool {
        self.capabilities.supports_tel_protocol
    }

    #[must_use]
    pub fn supports_scripts(&self) -> bool {
        self.capabilities.supports_scripts
    }

    /// returns `true` if the agent is expected to run flash-like plugins.
    #[must_use]
    pub fn supports_flash(&self) -> bool {
        self.capabilities.supports_flash
    }
}

impl FromStr for Classification {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl TryFrom<Option<&str>> for Classification {
    type Error = InvalidInput;

    fn try_from(agent: Option<&str>) -> Result<Self, Self::Error> {
        Self::try_new(agent)
    }
}

/// Capabilities of the device behind a [`Classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// `false` for bots
    pub is_browser: bool,
    pub device: DeviceKind,
    /// Support for `tel:` links
    pub supports_tel_protocol: bool,
    pub supports_scripts: bool,
    /// Support for flash-like plugins
    pub supports_flash: bool,
}

impl Capabilities {
    /// Capabilities assumed for agents not matching any device rule.
    pub const DESKTOP: Self = Self {
        is_browser: true,
        device: DeviceKind::Desktop,
        supports_tel_protocol: false,
        supports_scripts: true,
        supports_flash: true,
    };

    /// Capabilities of (feature) phones and other limited mobile devices.
    pub const MOBILE: Self = Self {
        is_browser: true,
        device: DeviceKind::Mobile,
        supports_tel_protocol: true,
        supports_scripts: false,
        supports_flash: false,
    };

    pub const BOT: Self = Self {
        is_browser: false,
        device: DeviceKind::Bot,
        supports_tel_protocol: false,
        supports_scripts: false,
        supports_flash: false,
    };
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::DESKTOP
    }
}

/// Device class of a [`Classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Personal Computers, as well as capable touch devices
    Desktop,
    /// Phones and other limited mobile devices
    Mobile,
    /// Crawlers, spiders and other automated clients
    Bot,
}

impl DeviceKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Bot => "bot",
        }
    }
}

impl FromStr for DeviceKind {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "desktop" => Ok(Self::Desktop),
                "mobile" => Ok(Self::Mobile),
                "bot" => Ok(Self::Bot),
                _ => Err(OpaqueError::from_display(format!("invalid device: {s}"))),
            }
        }
    }
}

impl Serialize for DeviceKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeviceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
