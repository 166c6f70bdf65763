use anyhow::Context;
use api::relay::EMAILJS_SEND_URL;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, Level};

// site configuration
//
// everything about the site that is not copy: who owns it, where the social links
// point, and how to reach the email relay.  the document is embedded at build time,
// so there is no runtime file access
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub owner: String,

    #[serde(default)]
    pub links: SocialLinks,

    #[serde(default)]
    pub relay: RelayConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            owner: String::from("Portfolio"),
            links: SocialLinks::default(),
            relay: RelayConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SocialLinks {
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

// email relay subtable
//
// the three ids are optional here because a missing id is not a parse error; the
// contact form reports it as a configuration problem when someone tries to send
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RelayConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,

    // name the message is addressed to
    #[serde(default)]
    pub recipient: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    EMAILJS_SEND_URL.to_owned()
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            service_id: None,
            template_id: None,
            public_key: None,
            recipient: String::new(),
            endpoint: default_endpoint(),
        }
    }
}

impl RelayConfig {
    // (service id, template id, public key), if all three are set and non-empty
    pub fn credentials(&self) -> Option<(&str, &str, &str)> {
        fn present(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.trim().is_empty())
        }

        Some((
            present(&self.service_id)?,
            present(&self.template_id)?,
            present(&self.public_key)?,
        ))
    }
}

// build-time overrides for the relay ids, so that keys need not be committed to the
// config file.  empty values are ignored
#[derive(Clone, Copy, Debug, Default)]
pub struct RelayOverrides {
    pub service_id: Option<&'static str>,
    pub template_id: Option<&'static str>,
    pub public_key: Option<&'static str>,
}

impl SiteConfig {
    pub fn with_overrides(mut self, overrides: RelayOverrides) -> Self {
        let apply = |slot: &mut Option<String>, value: Option<&'static str>| {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                *slot = Some(value.to_owned());
            }
        };

        apply(&mut self.relay.service_id, overrides.service_id);
        apply(&mut self.relay.template_id, overrides.template_id);
        apply(&mut self.relay.public_key, overrides.public_key);
        self
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level = Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!("successfully parsed site config");
    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DOC: &str = r#"
[config]
owner = "Jane Doe"

[config.links]
email = "mailto:jane@example.com"
github = "https://github.com/jane"

[config.relay]
service_id = "service_abc"
template_id = ""
recipient = "Jane Doe"
"#;

    #[test]
    fn parses_config_subtable() {
        let config = parse_config(DOC).unwrap();

        assert_eq!(config.owner, "Jane Doe");
        assert_eq!(config.links.github.as_deref(), Some("https://github.com/jane"));
        assert_eq!(config.links.linkedin, None);
        assert_eq!(config.relay.service_id.as_deref(), Some("service_abc"));
        assert_eq!(config.relay.endpoint, EMAILJS_SEND_URL);
    }

    #[test]
    fn empty_or_missing_ids_mean_unconfigured() {
        let config = parse_config(DOC).unwrap();

        assert_eq!(config.relay.credentials(), None);
    }

    #[test]
    fn overrides_fill_in_and_replace() {
        let config = parse_config(DOC).unwrap().with_overrides(RelayOverrides {
            service_id: Some("service_env"),
            template_id: Some("template_env"),
            public_key: Some(""),
        });

        assert_eq!(config.relay.service_id.as_deref(), Some("service_env"));
        assert_eq!(config.relay.template_id.as_deref(), Some("template_env"));
        assert_eq!(config.relay.credentials(), None);

        let config = config.with_overrides(RelayOverrides {
            public_key: Some("key_env"),
            ..RelayOverrides::default()
        });
        assert_eq!(
            config.relay.credentials(),
            Some(("service_env", "template_env", "key_env"))
        );
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_config("owner = 3").is_err());
    }
}
