/// Label used when no brand can be derived from a title
pub const UNKNOWN_BRAND: &str = "Unknown";

/// Chinese marques, matched case-sensitively before any Latin name.
/// `Polo` sits here because che168 titles carry it verbatim.
const CHINESE_BRANDS: &[&str] = &[
    "奔驰", "宝马", "奥迪", "大众", "丰田", "本田", "日产", "马自达", "斯巴鲁", "雷克萨斯",
    "现代", "起亚", "特斯拉", "比亚迪", "蔚来", "小鹏", "理想", "吉利", "长城", "哈弗",
    "博越", "星越", "威尔法", "路虎", "北京越野", "哈弗大狗", "Polo",
];

/// Latin marques, matched case-insensitively
const LATIN_BRANDS: &[&str] = &[
    "BMW", "Mercedes", "Audi", "Volkswagen", "Toyota", "Honda", "Nissan", "Mazda",
    "Subaru", "Lexus", "Hyundai", "KIA", "Tesla", "BYD", "NIO", "XPeng", "Li Auto",
    "Geely", "Great Wall", "Haval", "Land Rover",
];

/// Brand named in a title. Earlier list entries win ties.
///
/// Falls back to the first whitespace-separated token, or [`UNKNOWN_BRAND`]
/// for a blank title.
pub fn extract_brand(text: &str) -> String {
    for brand in CHINESE_BRANDS {
        if text.contains(brand) {
            return (*brand).to_string();
        }
    }

    let lowered = text.to_lowercase();
    for brand in LATIN_BRANDS {
        if lowered.contains(&brand.to_lowercase()) {
            return (*brand).to_string();
        }
    }

    text.split_whitespace()
        .next()
        .unwrap_or(UNKNOWN_BRAND)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_brand_in_title() {
        assert_eq!(extract_brand("2021 BMW X5 四驱 35万"), "BMW");
        assert_eq!(extract_brand("tesla model 3"), "Tesla");
    }

    #[test]
    fn chinese_list_is_checked_first() {
        assert_eq!(extract_brand("奔驰 GLC 2020"), "奔驰");
        assert_eq!(extract_brand("Mercedes 奔驰 2020"), "奔驰");
    }

    #[test]
    fn list_order_breaks_ties() {
        // 哈弗 precedes 哈弗大狗 in the list
        assert_eq!(extract_brand("哈弗大狗 2023款"), "哈弗");
    }

    #[test]
    fn falls_back_to_first_token() {
        assert_eq!(extract_brand("Zeekr 001 2023"), "Zeekr");
        assert_eq!(extract_brand("   "), UNKNOWN_BRAND);
        assert_eq!(extract_brand(""), UNKNOWN_BRAND);
    }
}
