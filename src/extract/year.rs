use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

pub const MIN_YEAR: i32 = 1990;
pub const MAX_YEAR: i32 = 2024;

/// Word-bounded patterns come first, then the same patterns anywhere in the
/// text (titles often glue the year to a CJK suffix such as `2022款`).
static YEAR_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"\b(20[0-2][0-9])\b").unwrap(),
        Regex::new(r"\b(19[9][0-9])\b").unwrap(),
        Regex::new(r"(20[0-2][0-9])").unwrap(),
        Regex::new(r"(19[9][0-9])").unwrap(),
    ]
});

/// Word-bounded year used when stripping the year out of a model name
pub(crate) static BOUNDED_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20[0-2][0-9]|19[9][0-9])\b").unwrap());

/// Model year mentioned in a title, if any.
///
/// Each pattern contributes only its first match. A match outside
/// `MIN_YEAR..=MAX_YEAR` moves on to the next pattern rather than the next
/// match.
pub fn extract_year(text: &str) -> Option<i32> {
    for pattern in YEAR_PATTERNS.iter() {
        let Some(found) = pattern.find(text) else {
            continue;
        };
        match found.as_str().parse::<i32>() {
            Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => return Some(year),
            Ok(year) => trace!(year, "year outside accepted range"),
            Err(_) => {}
        }
    }

    trace!(text, "no year found");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_year_glued_to_cjk_suffix() {
        assert_eq!(extract_year("2022款 奔驰 C-Class 豪华版"), Some(2022));
        assert_eq!(extract_year("2019年 丰田 凯美瑞"), Some(2019));
    }

    #[test]
    fn no_year_in_text() {
        assert_eq!(extract_year("豪华轿车 自动挡"), None);
        assert_eq!(extract_year(""), None);
    }

    #[test]
    fn nineties_years_are_accepted() {
        assert_eq!(extract_year("Toyota Land Cruiser 1998"), Some(1998));
    }

    #[test]
    fn out_of_range_year_is_rejected() {
        // 2025 and 2029 match the 20xx shape but fall outside the accepted range
        assert_eq!(extract_year("2025款 Model Y"), None);
        assert_eq!(extract_year("BMW 2029 concept"), None);
    }

    #[test]
    fn bounded_match_wins_over_earlier_unbounded_one() {
        assert_eq!(extract_year("2018款 改装 2020 年检"), Some(2020));
    }

    #[test]
    fn out_of_range_bounded_falls_through_to_later_pattern() {
        assert_eq!(extract_year("2027 1995"), Some(1995));
    }
}
