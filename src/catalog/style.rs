// Per-category presentation lookup and radar chart data

use super::{Attribute, Category, GenreRecord, ATTRIBUTE_MAX};
use serde::Serialize;

/// Accent styling the front end applies for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub label: &'static str,
    /// Chart stroke/fill color
    pub accent_color: &'static str,
    /// Badge classes for the detail card
    pub badge_class: &'static str,
}

impl CategoryStyle {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Standard => CategoryStyle {
                label: category.label(),
                accent_color: "#3b82f6",
                badge_class: "bg-blue-100 text-blue-600",
            },
            Category::KPop => CategoryStyle {
                label: category.label(),
                accent_color: "#db2777",
                badge_class: "bg-pink-100 text-pink-600",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarPoint {
    pub subject: &'static str,
    pub value: u8,
    pub full_mark: u8,
}

/// One point per attribute axis, in storage order
pub fn radar_points(genre: &GenreRecord) -> Vec<RadarPoint> {
    Attribute::ALL
        .iter()
        .map(|&attribute| RadarPoint {
            subject: attribute.label(),
            value: genre.attribute(attribute),
            full_mark: ATTRIBUTE_MAX,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::GENRES;

    #[test]
    fn test_styles_differ_by_category() {
        let standard = CategoryStyle::for_category(Category::Standard);
        let kpop = CategoryStyle::for_category(Category::KPop);
        assert_eq!(standard.accent_color, "#3b82f6");
        assert_eq!(kpop.accent_color, "#db2777");
        assert_eq!(kpop.label, "K-POP");
    }

    #[test]
    fn test_radar_points_follow_attributes() {
        let synthwave = GENRES.iter().find(|g| g.id == 2).unwrap();
        let points = radar_points(synthwave);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].subject, "에너지");
        let values: Vec<u8> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![8, 10, 1, 9, 6]);
        assert!(points.iter().all(|p| p.full_mark == 10));
    }
}
