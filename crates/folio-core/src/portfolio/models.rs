use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{markup, Error, Result};

/// The portfolio document rendered by the TUI.
///
/// The document owns the content; the effect catalogue only decorates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub title: String,
    pub tagline: String,
    pub hero: Hero,
    pub about: About,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certs: Vec<Cert>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub heading: String,
    pub subheading: String,
    /// Intro lines faded in sequentially on startup
    #[serde(default)]
    pub intro_lines: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Tag markup typed out by the code window (see [`crate::markup`])
    #[serde(default)]
    pub code_sample: String,
}

/// A numeric stat animated from zero to its target on first visibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: f64,
}

impl Stat {
    /// Targets with a fractional part render with one decimal digit
    pub fn is_decimal(&self) -> bool {
        self.target.fract() != 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineItem {
    pub period: String,
    pub role: String,
    pub org: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub blurb: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cert {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
}

impl Portfolio {
    /// Load a portfolio document from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let portfolio: Portfolio =
            toml::from_str(&content).map_err(|e| Error::Portfolio(e.to_string()))?;
        portfolio.validate()?;
        debug!(path = %path.display(), "loaded portfolio document");
        Ok(portfolio)
    }

    /// The built-in sample document, used when no file is configured
    pub fn sample() -> Self {
        sample_document()
    }

    /// Check the document is renderable
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Portfolio("title must not be empty".into()));
        }
        for stat in &self.hero.stats {
            if !stat.target.is_finite() || stat.target < 0.0 {
                return Err(Error::Portfolio(format!(
                    "stat \"{}\" has invalid target {}",
                    stat.label, stat.target
                )));
            }
        }
        if !self.hero.code_sample.is_empty() {
            markup::validate(&self.hero.code_sample)?;
        }
        Ok(())
    }

    /// Section titles in document order, used by the nav bar
    pub fn section_titles(&self) -> Vec<&'static str> {
        vec![
            "Home", "About", "Skills", "Journey", "Projects", "Certs", "Contact",
        ]
    }
}

use super::sample::sample_document;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_validates() {
        let portfolio = Portfolio::sample();
        assert!(portfolio.validate().is_ok());
        assert!(!portfolio.hero.stats.is_empty());
        assert!(!portfolio.hero.code_sample.is_empty());
    }

    #[test]
    fn test_sample_roundtrip() {
        let portfolio = Portfolio::sample();
        let toml_str = toml::to_string_pretty(&portfolio).unwrap();
        let parsed: Portfolio = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.title, portfolio.title);
        assert_eq!(parsed.hero.stats.len(), portfolio.hero.stats.len());
    }

    #[test]
    fn test_invalid_stat_rejected() {
        let mut portfolio = Portfolio::sample();
        portfolio.hero.stats.push(Stat {
            label: "broken".into(),
            target: f64::NAN,
        });
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn test_unbalanced_code_sample_rejected() {
        let mut portfolio = Portfolio::sample();
        portfolio.hero.code_sample = "<kw>fn</kw> <fn".into();
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn test_stat_is_decimal() {
        let d = Stat { label: "uptime".into(), target: 98.6 };
        let i = Stat { label: "projects".into(), target: 42.0 };
        assert!(d.is_decimal());
        assert!(!i.is_decimal());
    }
}
