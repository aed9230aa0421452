use crate::models::RawListing;
use tracing::info;

const PLACEHOLDER_COUNT: usize = 10;

/// Stand-in cards used when the listing page yields nothing parseable,
/// so the catalog still has something to show.
pub fn placeholder_listings() -> Vec<RawListing> {
    info!("📋 Generating {} placeholder listings", PLACEHOLDER_COUNT);

    (0..PLACEHOLDER_COUNT)
        .map(|i| RawListing {
            title: format!("测试汽车 {}号 - Test Car #{}", i + 1, i + 1),
            // spread across 15..=45万
            price: format!("{}万", 15 + (i * 7) % 31),
            image_url: format!("https://picsum.photos/seed/{}/800/600", i + 100),
            car_id: format!("test_car_{i}"),
            local_image_url: None,
        })
        .collect()
}
