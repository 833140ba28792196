//! # 字段表数据模型
//!
//! CASTEP 输入文件的统一内存表示：保持插入顺序的
//! `小写关键字 -> 标量值 / 原始行块` 映射。
//!
//! ## 依赖关系
//! - 被 `models/cell.rs`, `models/param.rs`, `parsers/` 使用
//! - 无外部模块依赖

/// 字段值：标量字符串或原始行序列（%BLOCK 内容）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    Block(Vec<String>),
}

impl FieldValue {
    /// 以标量形式取值（块字段返回 None）
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(v) => Some(v),
            FieldValue::Block(_) => None,
        }
    }

    /// 以块形式取值（标量字段返回 None）
    pub fn as_block(&self) -> Option<&[String]> {
        match self {
            FieldValue::Scalar(_) => None,
            FieldValue::Block(lines) => Some(lines),
        }
    }
}

/// 保持插入顺序的字段表
///
/// 键数量很小（典型 < 40），线性查找足够；
/// 重复设置已有键时原地更新、不改变顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    entries: Vec<(String, FieldValue)>,
}

impl FieldTable {
    pub fn new() -> Self {
        FieldTable {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// 取标量值（不存在或为块字段时返回 None）
    pub fn get_scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_scalar())
    }

    /// 取块内容（不存在或为标量字段时返回 None）
    pub fn get_block(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(|v| v.as_block())
    }

    /// 设置字段；键已存在时原地更新（保持顺序），否则追加到末尾
    pub fn set(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.get_mut(&key) {
            Some(slot) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn set_scalar(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, FieldValue::Scalar(value.into()));
    }

    pub fn set_block(&mut self, key: impl Into<String>, lines: Vec<String>) {
        self.set(key, FieldValue::Block(lines));
    }

    /// 删除字段；不存在时为 no-op，返回被删除的值
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// 按插入顺序迭代
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 按插入顺序列出键
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, FieldValue)> for FieldTable {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        let mut table = FieldTable::new();
        for (k, v) in iter {
            table.set(k, v);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut table = FieldTable::new();
        table.set_scalar("task", "geometryoptimization");
        table.set_scalar("xc_functional", "pbe");
        table.set_scalar("cut_off_energy", "340");

        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["task", "xc_functional", "cut_off_energy"]);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut table = FieldTable::new();
        table.set_scalar("a", "1");
        table.set_scalar("b", "2");
        table.set_scalar("a", "3");

        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(table.get_scalar("a"), Some("3"));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut table = FieldTable::new();
        table.set_scalar("a", "1");
        assert!(table.remove("b").is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_scalar_block_distinction() {
        let mut table = FieldTable::new();
        table.set_scalar("kpoints_mp_spacing", "0.05");
        table.set_block(
            "positions_frac",
            vec!["Fe 0.0 0.0 0.0".to_string(), "O 0.5 0.5 0.5".to_string()],
        );

        assert!(table.get_scalar("positions_frac").is_none());
        assert!(table.get_block("kpoints_mp_spacing").is_none());
        assert_eq!(table.get_block("positions_frac").unwrap().len(), 2);
    }
}
