//! Hard-coded guideline catalog: the universe of trackable clinical skills.
//!
//! Edit the item tables here to match the ward's education standard. Item ids
//! are stable keys referenced by stored records and must never be reused for
//! a different skill.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One trackable clinical skill. Immutable, defined at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuidelineItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// An ordered group of checklist items.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub items: &'static [GuidelineItem],
}

// ---------------------------------------------------------------------------
// Catalog data
// ---------------------------------------------------------------------------

/// Detailed Lv3 criteria shown on request next to each item.
pub const LEVEL3_CRITERIA: &str = "Lv3基準： 安全安楽に実施でき、合併症の徴候を観察できること";

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "I. 態度",
        items: &[
            GuidelineItem {
                id: "ethic_1",
                title: "倫理的感性",
                description: "守秘義務を守り、患者のプライバシーに配慮できる",
            },
            GuidelineItem {
                id: "comm_1",
                title: "報告・連絡・相談",
                description: "適切なタイミングで報告・連絡・相談ができる",
            },
            GuidelineItem {
                id: "resp_1",
                title: "責任意識",
                description: "自己の課題を認識し、主体的に学習に取り組む",
            },
        ],
    },
    Category {
        name: "II. 技術",
        items: &[
            GuidelineItem {
                id: "tech_1",
                title: "感染予防（手洗い）",
                description: "正しい手順で衛生的手洗い・手指消毒ができる",
            },
            GuidelineItem {
                id: "tech_2",
                title: "バイタルサイン",
                description: "正確に測定し、異常値を報告できる",
            },
            GuidelineItem {
                id: "tech_3",
                title: "採血・静脈路確保",
                description: "安全に実施でき、合併症の兆候を観察できる",
            },
            GuidelineItem {
                id: "tech_4",
                title: "吸引",
                description: "口腔・鼻腔吸引を安全に実施できる",
            },
            GuidelineItem {
                id: "tech_5",
                title: "与薬（内服）",
                description: "6Rを確認し、誤薬なく与薬できる",
            },
        ],
    },
    Category {
        name: "III. 管理",
        items: &[
            GuidelineItem {
                id: "safe_1",
                title: "医療安全",
                description: "インシデントレポートの目的を理解し、記述できる",
            },
            GuidelineItem {
                id: "cost_1",
                title: "コスト意識",
                description: "医療材料を適切に使用できる",
            },
        ],
    },
];

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

pub fn categories() -> &'static [Category] {
    CATEGORIES
}

/// Total number of trackable items across all categories.
pub fn total_items() -> usize {
    CATEGORIES.iter().map(|c| c.items.len()).sum()
}

/// Look up an item by id, returning it with its category.
pub fn find_item(id: &str) -> Option<(&'static Category, &'static GuidelineItem)> {
    CATEGORIES
        .iter()
        .find_map(|c| c.items.iter().find(|i| i.id == id).map(|i| (c, i)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_three_categories_and_ten_items() {
        assert_eq!(categories().len(), 3);
        assert_eq!(total_items(), 10);
    }

    #[test]
    fn item_ids_are_unique() {
        let ids: Vec<&str> = CATEGORIES
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id))
            .collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn find_item_returns_item_with_category() {
        let (category, item) = find_item("tech_1").unwrap();
        assert_eq!(category.name, "II. 技術");
        assert_eq!(item.title, "感染予防（手洗い）");
    }

    #[test]
    fn find_item_unknown_id_is_none() {
        assert!(find_item("tech_99").is_none());
    }

    #[test]
    fn no_category_is_empty() {
        for category in categories() {
            assert!(!category.items.is_empty(), "{} has no items", category.name);
        }
    }
}
