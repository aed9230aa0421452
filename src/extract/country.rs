use crate::models::Country;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Marque to country of origin, in both scripts. Order matters for the
/// partial-match scan in [`get_country_by_brand`].
const BRAND_COUNTRIES: &[(&str, Country)] = &[
    // Germany
    ("奔驰", Country::Germany),
    ("宝马", Country::Germany),
    ("奥迪", Country::Germany),
    ("大众", Country::Germany),
    ("BMW", Country::Germany),
    ("Mercedes", Country::Germany),
    ("Audi", Country::Germany),
    ("Volkswagen", Country::Germany),
    ("迈巴赫", Country::Germany),
    ("AMG", Country::Germany),
    ("保时捷", Country::Germany),
    ("Porsche", Country::Germany),
    // Japan
    ("丰田", Country::Japan),
    ("本田", Country::Japan),
    ("日产", Country::Japan),
    ("马自达", Country::Japan),
    ("斯巴鲁", Country::Japan),
    ("雷克萨斯", Country::Japan),
    ("Toyota", Country::Japan),
    ("Honda", Country::Japan),
    ("Nissan", Country::Japan),
    ("Mazda", Country::Japan),
    ("Subaru", Country::Japan),
    ("Lexus", Country::Japan),
    ("奥德赛", Country::Japan),
    ("英菲尼迪", Country::Japan),
    ("Infiniti", Country::Japan),
    ("讴歌", Country::Japan),
    ("Acura", Country::Japan),
    // Korea
    ("现代", Country::Korea),
    ("起亚", Country::Korea),
    ("Hyundai", Country::Korea),
    ("KIA", Country::Korea),
    ("捷尼赛思", Country::Korea),
    ("Genesis", Country::Korea),
    // USA
    ("特斯拉", Country::Usa),
    ("Tesla", Country::Usa),
    ("福特", Country::Usa),
    ("Ford", Country::Usa),
    ("雪佛兰", Country::Usa),
    ("Chevrolet", Country::Usa),
    ("凯迪拉克", Country::Usa),
    ("Cadillac", Country::Usa),
    ("林肯", Country::Usa),
    ("Lincoln", Country::Usa),
    ("别克", Country::Usa),
    ("Buick", Country::Usa),
    ("探险者", Country::Usa),
    ("Explorer", Country::Usa),
    // China
    ("比亚迪", Country::China),
    ("蔚来", Country::China),
    ("小鹏", Country::China),
    ("理想", Country::China),
    ("吉利", Country::China),
    ("长城", Country::China),
    ("哈弗", Country::China),
    ("博越", Country::China),
    ("星越", Country::China),
    ("威尔法", Country::China),
    ("哈弗大狗", Country::China),
    ("北京越野", Country::China),
    ("传祺", Country::China),
    ("广汽", Country::China),
    ("BYD", Country::China),
    ("NIO", Country::China),
    ("XPeng", Country::China),
    ("Li Auto", Country::China),
    ("Geely", Country::China),
    ("深蓝", Country::China),
    ("阿维塔", Country::China),
    ("零跑", Country::China),
    ("极狐", Country::China),
    ("世纪", Country::China),
    // United Kingdom
    ("路虎", Country::Uk),
    ("Land Rover", Country::Uk),
    ("揽胜", Country::Uk),
    ("Range Rover", Country::Uk),
    ("捷豹", Country::Uk),
    ("Jaguar", Country::Uk),
    ("迈凯伦", Country::Uk),
    ("McLaren", Country::Uk),
    ("宾利", Country::Uk),
    ("Bentley", Country::Uk),
    ("劳斯莱斯", Country::Uk),
    ("Rolls-Royce", Country::Uk),
    // Italy
    ("法拉利", Country::Italy),
    ("Ferrari", Country::Italy),
    ("兰博基尼", Country::Italy),
    ("Lamborghini", Country::Italy),
    ("玛莎拉蒂", Country::Italy),
    ("Maserati", Country::Italy),
    ("阿尔法罗密欧", Country::Italy),
    ("Alfa Romeo", Country::Italy),
    // France
    ("标致", Country::France),
    ("Peugeot", Country::France),
    ("雪铁龙", Country::France),
    ("Citroën", Country::France),
    ("雷诺", Country::France),
    ("Renault", Country::France),
    ("DS", Country::France),
    // Sweden
    ("沃尔沃", Country::Sweden),
    ("Volvo", Country::Sweden),
];

static EXACT: LazyLock<HashMap<&'static str, Country>> =
    LazyLock::new(|| BRAND_COUNTRIES.iter().copied().collect());

/// Country of origin for a brand label.
///
/// Exact lookup first, then the first table entry where either string
/// contains the other.
pub fn get_country_by_brand(brand: &str) -> Country {
    if brand.is_empty() {
        return Country::Unknown;
    }

    if let Some(country) = EXACT.get(brand) {
        return *country;
    }

    BRAND_COUNTRIES
        .iter()
        .find(|(name, _)| brand.contains(name) || name.contains(brand))
        .map(|(_, country)| *country)
        .unwrap_or(Country::Unknown)
}
