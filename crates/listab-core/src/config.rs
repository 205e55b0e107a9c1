//! Enhancer configuration.
//!
//! Deserialized from the object passed to the JS `start()` entry point; every
//! field is optional and falls back to the defaults below.

use serde::Deserialize;
use smol_str::SmolStr;

use crate::error::ConfigError;
use crate::page::{PageMatcher, PageTarget, default_targets};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhancerConfig {
    /// Pages the enhancement is active on.
    pub targets: Vec<PageTarget>,
    /// Inline style forced onto every bound field.
    pub style: FieldStyle,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            style: FieldStyle::default(),
        }
    }
}

impl EnhancerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        for (target, page) in self.targets.iter().enumerate() {
            if page.segments.is_empty() {
                return Err(ConfigError::EmptyTarget { target });
            }
            if let Some(rule) = page.segments.iter().find(|r| r.value.is_empty()) {
                return Err(ConfigError::EmptySegmentValue {
                    target,
                    index: rule.index,
                });
            }
        }
        self.style.validate()
    }

    pub fn matcher(&self) -> PageMatcher {
        PageMatcher::new(self.targets.clone())
    }
}

/// Font overrides applied with `important` priority.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldStyle {
    pub font_family: SmolStr,
    pub font_variant_ligatures: SmolStr,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            font_family: SmolStr::new_static("Jetbrains Mono"),
            font_variant_ligatures: SmolStr::new_static("none"),
        }
    }
}

impl FieldStyle {
    /// CSS property/value pairs, in the order they are applied.
    pub fn properties(&self) -> [(&'static str, &str); 2] {
        [
            ("font-family", self.font_family.as_str()),
            ("font-variant-ligatures", self.font_variant_ligatures.as_str()),
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (property, value) in self.properties() {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyStyle { property });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::SegmentRule;

    #[test]
    fn test_default_is_valid() {
        let config = EnhancerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.targets.len(), 4);
        assert!(config.matcher().is_target_page("/a/b/pull/1"));
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: EnhancerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EnhancerConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config: EnhancerConfig = serde_json::from_str(
            r#"{
                "targets": [{ "segments": [{ "index": 3, "value": "discussions" }] }],
                "style": { "fontFamily": "Fira Code" }
            }"#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.style.font_family, "Fira Code");
        assert_eq!(config.style.font_variant_ligatures, "none");
        assert_eq!(
            config.targets[0].segments,
            vec![SegmentRule::new(3, "discussions")]
        );
        assert!(config.matcher().is_target_page("/a/b/discussions/4"));
        assert!(!config.matcher().is_target_page("/a/b/issues/4"));
    }

    #[test]
    fn test_validation_errors() {
        let mut config = EnhancerConfig::default();
        config.targets.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoTargets)));

        let mut config = EnhancerConfig::default();
        config.targets.push(PageTarget { segments: vec![] });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyTarget { target: 4 })
        ));

        let mut config = EnhancerConfig::default();
        config.targets[1] = PageTarget::segment(3, "");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptySegmentValue { target: 1, index: 3 })
        ));

        let mut config = EnhancerConfig::default();
        config.style.font_family = SmolStr::new_static("  ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyStyle {
                property: "font-family"
            })
        ));
    }
}
