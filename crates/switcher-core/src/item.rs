//! Showcase content records.
//!
//! The demo grid displays a fixed catalog of four items. The records are
//! static content: fetched once per run, never mutated, discarded on exit.

use serde::{Deserialize, Serialize};

/// Aggregate rating attached to a demo item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating on a 0..=5 scale.
    pub rate: f32,
    /// Number of views that produced the rating.
    pub count: u32,
}

/// A single entry in the showcase grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Kebab-case category tag, e.g. `ui-design`.
    pub category: String,
    /// Remote image URL for the card header.
    pub image: String,
    /// Short feature labels rendered as pills, in display order.
    pub features: Vec<String>,
    pub rating: Rating,
}

impl DemoItem {
    /// Category with the kebab separator replaced for display.
    pub fn category_display(&self) -> String {
        self.category.replace('-', " ")
    }
}

/// Returns the canonical demo catalog, in display order.
///
/// The content is deliberately fixed: every fetch yields the same four
/// records so theme switching can be compared against identical content.
pub fn demo_items() -> Vec<DemoItem> {
    vec![
        DemoItem {
            id: 1,
            title: "Minimalist Design System".to_string(),
            description: "Clean, modern interface with subtle shadows and refined \
                          typography for professional applications."
                .to_string(),
            category: "ui-design".to_string(),
            image: "https://images.unsplash.com/photo-1586717791821-3f44a563fa4c?w=400&h=400&fit=crop"
                .to_string(),
            features: vec![
                "Clean Typography".to_string(),
                "Subtle Animations".to_string(),
                "Professional Look".to_string(),
            ],
            rating: Rating { rate: 4.8, count: 324 },
        },
        DemoItem {
            id: 2,
            title: "Dark Professional Theme".to_string(),
            description: "Sophisticated dark mode with elegant gradients and premium \
                          feel for power users."
                .to_string(),
            category: "dark-mode".to_string(),
            image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=400&h=400&fit=crop"
                .to_string(),
            features: vec![
                "Dark Mode".to_string(),
                "Elegant Gradients".to_string(),
                "Premium Feel".to_string(),
            ],
            rating: Rating { rate: 4.9, count: 256 },
        },
        DemoItem {
            id: 3,
            title: "Creative Colorful UI".to_string(),
            description: "Vibrant, playful interface with bold colors and creative \
                          animations for artistic projects."
                .to_string(),
            category: "creative".to_string(),
            image: "https://images.unsplash.com/photo-1558655146-d09347e92766?w=400&h=400&fit=crop"
                .to_string(),
            features: vec![
                "Bold Colors".to_string(),
                "Creative Animations".to_string(),
                "Artistic Flair".to_string(),
            ],
            rating: Rating { rate: 4.7, count: 189 },
        },
        DemoItem {
            id: 4,
            title: "Responsive Components".to_string(),
            description: "All themes are fully responsive and adapt beautifully to any \
                          screen size or device."
                .to_string(),
            category: "responsive".to_string(),
            image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=400&h=400&fit=crop"
                .to_string(),
            features: vec![
                "Mobile First".to_string(),
                "Adaptive Layout".to_string(),
                "Cross-Device".to_string(),
            ],
            rating: Rating { rate: 4.9, count: 412 },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_items_in_fixed_order() {
        let items = demo_items();
        assert_eq!(items.len(), 4);
        let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_catalog_is_stable_across_calls() {
        assert_eq!(demo_items(), demo_items());
    }

    #[test]
    fn test_ratings_within_scale() {
        for item in demo_items() {
            assert!(
                (0.0..=5.0).contains(&item.rating.rate),
                "{} rating out of scale",
                item.title
            );
            assert!(item.rating.count > 0);
        }
    }

    #[test]
    fn test_every_item_has_features_and_image() {
        for item in demo_items() {
            assert!(!item.features.is_empty());
            assert!(item.image.starts_with("https://"));
        }
    }

    #[test]
    fn test_category_display_replaces_separator() {
        let items = demo_items();
        assert_eq!(items[0].category_display(), "ui design");
        assert_eq!(items[2].category_display(), "creative");
    }

    #[test]
    fn test_item_roundtrips_through_json() {
        let items = demo_items();
        let json = serde_json::to_string(&items[1]).unwrap();
        let back: DemoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, items[1]);
    }
}
