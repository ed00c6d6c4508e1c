/// One display column of the 约号 table. Persisted verbatim and re-applied
/// at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    pub key: String,
    pub title: String,
    pub visible: bool,
    pub order: i64,
}

impl ColumnConfig {
    fn new(key: &str, title: &str, order: i64) -> Self {
        ColumnConfig {
            key: key.to_string(),
            title: title.to_string(),
            visible: true,
            order,
        }
    }
}

/// Default column set and order of the 约号 table.
pub fn default_columns() -> Vec<ColumnConfig> {
    vec![
        ColumnConfig::new("id", "船公司约号", 0),
        ColumnConfig::new("line", "适用航线", 1),
        ColumnConfig::new("shippingCompany", "船公司", 2),
        ColumnConfig::new("priceNature", "约价性质", 3),
        ColumnConfig::new("isNAC", "是否NAC", 4),
        ColumnConfig::new("nac", "NAC", 5),
        ColumnConfig::new("applicableProducts", "适用品名", 6),
        ColumnConfig::new("mqc", "MQC", 7),
        ColumnConfig::new("cabinProtection", "舱保", 8),
        ColumnConfig::new("validPeriod", "有效期", 9),
        ColumnConfig::new("isActivated", "是否启用", 10),
    ]
}

/// Visible columns sorted by `order` ascending; the sort is stable so ties
/// keep their stored relative order.
pub fn visible_ordered(configs: &[ColumnConfig]) -> Vec<ColumnConfig> {
    let mut ordered: Vec<ColumnConfig> = configs.to_vec();
    ordered.sort_by_key(|config| config.order);
    ordered.retain(|config| config.visible);
    ordered
}

/// Columns sorted by `order`, visible or not, as the settings drawer lists
/// them.
pub fn drawer_ordered(configs: &[ColumnConfig]) -> Vec<ColumnConfig> {
    let mut ordered: Vec<ColumnConfig> = configs.to_vec();
    ordered.sort_by_key(|config| config.order);
    ordered
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Swaps the config at `index` with its neighbor and renumbers `order` to the
/// new positions. A move past either end is a no-op. Expects `configs` in
/// drawer order (sorted by `order`).
pub fn move_column(configs: &mut [ColumnConfig], index: usize, direction: MoveDirection) {
    let target = match direction {
        MoveDirection::Up if index > 0 => index - 1,
        MoveDirection::Down if index + 1 < configs.len() => index + 1,
        _ => return,
    };
    configs.swap(index, target);
    for (position, config) in configs.iter_mut().enumerate() {
        config.order = position as i64;
    }
}

/// 全选 in the settings drawer: every column's visibility in one pass.
pub fn set_all_visible(configs: &mut [ColumnConfig], visible: bool) {
    for config in configs.iter_mut() {
        config.visible = visible;
    }
}
