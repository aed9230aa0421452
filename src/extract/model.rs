use super::brand::UNKNOWN_BRAND;
use super::year::BOUNDED_YEAR;
use regex::Regex;
use std::sync::LazyLock;

pub const UNKNOWN_MODEL: &str = "Unknown Model";

const MAX_MODEL_WORDS: usize = 3;

/// Tokens like `2.0T`, `1.5L` or `300`
static ENGINE_DISPLACEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.\d]*[LT]?$").unwrap());

/// Model name: what is left of the title once the brand and year are gone.
///
/// The brand is removed once; every copy of the year is removed. Looks at the
/// first three remaining tokens only and drops displacement tokens among them.
pub fn extract_model(text: &str, brand: &str) -> String {
    if brand.is_empty() || brand == UNKNOWN_BRAND {
        return UNKNOWN_MODEL.to_string();
    }

    let mut rest = text.replacen(brand, "", 1).trim().to_string();
    if let Some(year) = BOUNDED_YEAR.find(&rest) {
        rest = rest.replace(year.as_str(), "").trim().to_string();
    }

    let words: Vec<&str> = rest
        .split_whitespace()
        .take(MAX_MODEL_WORDS)
        .filter(|word| !ENGINE_DISPLACEMENT.is_match(word))
        .collect();

    if words.is_empty() {
        UNKNOWN_MODEL.to_string()
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_brand_means_unknown_model() {
        assert_eq!(extract_model("anything", UNKNOWN_BRAND), UNKNOWN_MODEL);
        assert_eq!(extract_model("anything", ""), UNKNOWN_MODEL);
    }

    #[test]
    fn strips_brand_and_year() {
        assert_eq!(extract_model("BMW X5 2021 xDrive40i", "BMW"), "X5 xDrive40i");
    }

    #[test]
    fn every_copy_of_the_year_is_removed() {
        assert_eq!(
            extract_model("奔驰 2020 C260L 2020款", "奔驰"),
            "C260L 款"
        );
    }

    #[test]
    fn brand_is_removed_once() {
        assert_eq!(extract_model("Polo Polo Plus", "Polo"), "Polo Plus");
    }

    #[test]
    fn drops_engine_displacement_tokens() {
        assert_eq!(extract_model("奔驰 C260L 1.5T 豪华版", "奔驰"), "C260L 豪华版");
        assert_eq!(extract_model("Audi 2.0 A4L", "Audi"), "A4L");
    }

    #[test]
    fn only_first_three_tokens_are_considered() {
        assert_eq!(
            extract_model("丰田 凯美瑞 双擎 豪华版 运动款", "丰田"),
            "凯美瑞 双擎 豪华版"
        );
    }

    #[test]
    fn glued_year_is_kept() {
        // 2019年 has no word boundary after the digits
        assert_eq!(
            extract_model("2019年 丰田 凯美瑞 2.5L 自动", "丰田"),
            "2019年 凯美瑞"
        );
    }

    #[test]
    fn nothing_left_means_unknown_model() {
        assert_eq!(extract_model("Tesla 2.0T", "Tesla"), UNKNOWN_MODEL);
        assert_eq!(extract_model("Tesla", "Tesla"), UNKNOWN_MODEL);
    }

    #[test]
    fn case_mismatched_brand_is_left_in_place() {
        assert_eq!(extract_model("bmw x3", "BMW"), "bmw x3");
    }
}
