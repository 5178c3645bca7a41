//! Landing-page content: hero copy, promotions, menu and testimonials.
//!
//! Content lives in a TOML document. A default copy is compiled into the
//! binary and `--content` swaps in another file.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_CONTENT: &str = include_str!("../assets/content.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("duplicate menu item id `{0}`")]
    DuplicateMenuId(String),
    #[error("testimonial by {author} has rating {rating}, expected 1 to 5")]
    InvalidRating { author: String, rating: u8 },
}

/// `#RRGGBB` color from the content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| format!("color `{value}` must start with '#'"))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color `{value}` must look like #RRGGBB"));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Promo {
    pub title: String,
    pub subtitle: String,
    pub badge: String,
    pub accent: Rgb,
    #[serde(default)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tacos,
    Burritos,
    Grill,
    Sides,
    Drinks,
    Desserts,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Tacos => "Tacos",
            Category::Burritos => "Burritos",
            Category::Grill => "Grill",
            Category::Sides => "Sides",
            Category::Drinks => "Drinks",
            Category::Desserts => "Desserts",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub category: Category,
    #[serde(default)]
    pub spicy: bool,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub hero: Hero,
    #[serde(default)]
    pub promos: Vec<Promo>,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl Content {
    /// Built-in content shipped with the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::parse(DEFAULT_CONTENT, "built-in content")
    }

    /// Load from `path`, or fall back to the built-in content.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        let Some(path) = path else {
            return Self::builtin();
        };
        let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut content = Self::parse(&text, &path.display().to_string())?;

        // Promo images are relative to the content file.
        if let Some(base) = path.parent() {
            for promo in &mut content.promos {
                if let Some(image) = promo.image.as_mut() {
                    if image.is_relative() {
                        *image = base.join(&*image);
                    }
                }
            }
        }
        info!(path = %path.display(), "loaded content file");
        Ok(content)
    }

    pub fn parse(text: &str, origin: &str) -> Result<Self, ContentError> {
        let content: Content = toml::from_str(text).map_err(|source| ContentError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        content.validate()?;
        debug!(
            promos = content.promos.len(),
            menu = content.menu.len(),
            testimonials = content.testimonials.len(),
            "parsed content from {origin}"
        );
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for item in &self.menu {
            if !seen.insert(item.id.as_str()) {
                return Err(ContentError::DuplicateMenuId(item.id.clone()));
            }
        }
        for t in &self.testimonials {
            if !(1..=5).contains(&t.rating) {
                return Err(ContentError::InvalidRating {
                    author: t.author.clone(),
                    rating: t.rating,
                });
            }
        }
        Ok(())
    }

    pub fn featured_menu(&self) -> Vec<MenuItem> {
        self.menu.iter().filter(|m| m.featured).cloned().collect()
    }
}
