//! # Nursery Stock
//!
//! The built-in plant list.
//!
//! ## Categories
//! - Air Purifying (snake plant, spider plant, peace lily, ...)
//! - Aromatic (lavender, jasmine, rosemary, ...)
//! - Insect Repellent (citronella, marigold, ...)
//! - Medicinal (aloe vera, echinacea, ...)
//! - Low Maintenance (ZZ plant, pothos, ...)
//!
//! Each entry has:
//! - Stable numeric id (1-based, in listing order)
//! - Price in cents
//! - One-line description (searched) and care details (not searched)

use paradise_core::{Money, Product, ProductId};

/// `(title, price_cents, description, details)`.
type PlantRow = (&'static str, i64, &'static str, &'static str);

/// Plant rows grouped by category, in listing order.
const STOCK: &[(&str, &[PlantRow])] = &[
    (
        "Air Purifying",
        &[
            (
                "Snake Plant",
                1500,
                "Produces oxygen at night, improving air quality.",
                "Bright indirect light; water every 2-3 weeks.",
            ),
            (
                "Spider Plant",
                1200,
                "Filters formaldehyde and xylene from the air.",
                "Keep soil lightly moist; tolerates low light.",
            ),
            (
                "Peace Lily",
                1800,
                "Removes mold spores and purifies the air.",
                "Shade-loving; droops when thirsty.",
            ),
            (
                "Boston Fern",
                2000,
                "Adds humidity to the air and removes toxins.",
                "Likes humidity; mist leaves weekly.",
            ),
        ],
    ),
    (
        "Aromatic",
        &[
            (
                "Lavender",
                2000,
                "Calming scent, used in aromatherapy.",
                "Full sun; let soil dry out between waterings.",
            ),
            (
                "Jasmine",
                1800,
                "Sweet fragrance that promotes relaxation.",
                "Bright light; keep soil evenly moist.",
            ),
            (
                "Rosemary",
                1500,
                "Invigorating scent, also a kitchen herb.",
                "Full sun; water when the top inch is dry.",
            ),
        ],
    ),
    (
        "Insect Repellent",
        &[
            (
                "Citronella",
                1250,
                "Lemony scent keeps mosquitoes away.",
                "Full sun outdoors; bring inside before frost.",
            ),
            (
                "Marigold",
                850,
                "Deters aphids and other garden pests.",
                "Full sun; deadhead spent blooms.",
            ),
        ],
    ),
    (
        "Medicinal",
        &[
            (
                "Aloe Vera",
                1400,
                "Soothing gel for minor burns and skin care.",
                "Bright light; water sparingly.",
            ),
            (
                "Echinacea",
                1600,
                "Traditionally used to support the immune system.",
                "Full sun; drought tolerant once established.",
            ),
        ],
    ),
    (
        "Low Maintenance",
        &[
            (
                "ZZ Plant",
                2500,
                "Thrives in low light and needs little water.",
                "Water every 3-4 weeks; avoid overwatering.",
            ),
            (
                "Pothos",
                1000,
                "Trailing vine that tolerates neglect.",
                "Any light; water when soil is dry.",
            ),
        ],
    ),
];

/// Builds the nursery product list.
pub(crate) fn nursery_stock() -> Vec<Product> {
    STOCK
        .iter()
        .flat_map(|(category, rows)| rows.iter().map(move |row| (*category, row)))
        .zip(1u32..)
        .map(|((category, &(title, price_cents, description, details)), id)| Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Money::from_cents(price_cents),
            category: category.to_string(),
            description: description.to_string(),
            details: details.to_string(),
            image: format!("images/{}.jpg", slug(title)),
        })
        .collect()
}

/// "ZZ Plant" → "zz-plant".
fn slug(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_sequential_and_unique() {
        let stock = nursery_stock();
        let ids: Vec<u32> = stock.iter().map(|p| p.id.get()).collect();
        let expected: Vec<u32> = (1..=stock.len() as u32).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_prices_are_positive() {
        assert!(nursery_stock().iter().all(|p| p.price.is_positive()));
    }

    #[test]
    fn test_titles_are_unique() {
        let stock = nursery_stock();
        let titles: HashSet<&str> = stock.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles.len(), stock.len());
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("ZZ Plant"), "zz-plant");
        assert_eq!(slug("Aloe Vera"), "aloe-vera");
    }
}
