//! Category colour palette.

use serde::{Deserialize, Serialize};

/// Default chart colours, assigned to categories by rank.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6",
    "#06b6d4", "#84cc16", "#f97316", "#ec4899", "#6366f1",
];

/// A non-empty list of colours. Lookups wrap around, so any index is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Returns `None` for an empty colour list.
    pub fn new(colors: Vec<String>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index into the palette for the given rank (`rank mod len`).
    pub fn index_for(&self, rank: usize) -> usize {
        rank % self.colors.len()
    }

    pub fn color_for(&self, rank: usize) -> &str {
        &self.colors[self.index_for(rank)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = String;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Palette::new(colors).ok_or_else(|| "palette must contain at least one colour".to_string())
    }
}

impl From<Palette> for Vec<String> {
    fn from(p: Palette) -> Self {
        p.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_rejected() {
        assert!(Palette::new(vec![]).is_none());
        let parsed: Result<Palette, _> = serde_json::from_str("[]");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_color_wraps() {
        let p = Palette::new(vec!["red".into(), "blue".into()]).unwrap();
        assert_eq!(p.color_for(0), "red");
        assert_eq!(p.color_for(1), "blue");
        assert_eq!(p.color_for(2), "red");
        assert_eq!(p.index_for(5), 1);
    }

    #[test]
    fn test_default_palette() {
        let p = Palette::default();
        assert_eq!(p.len(), 10);
        assert_eq!(p.color_for(0), "#3b82f6");
        assert_eq!(p.color_for(10), "#3b82f6");
    }
}
