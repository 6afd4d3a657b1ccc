//! 类型替换表

/// 一组替换: `$0` 对应类型名, `$1` 对应类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Substitution {
    pub type_name: &'static str,
    pub type_label: &'static str,
}

impl Substitution {
    pub const fn new(type_name: &'static str, type_label: &'static str) -> Self {
        Self {
            type_name,
            type_label,
        }
    }

    /// 按占位符顺序排列的替换值
    pub fn values(&self) -> [&'static str; 2] {
        [self.type_name, self.type_label]
    }
}

/// 内置替换表, 顺序即展开顺序
pub const SUBSTITUTION_TABLE: [Substitution; 10] = [
    Substitution::new("int8_t", "int8"),
    Substitution::new("uint8_t", "unsigned int8"),
    Substitution::new("int16_t", "int16"),
    Substitution::new("uint16_t", "unsigned int16"),
    Substitution::new("int32_t", "int32"),
    Substitution::new("uint32_t", "unsigned int32"),
    Substitution::new("int64_t", "int64"),
    Substitution::new("uint64_t", "unsigned int64"),
    Substitution::new("float", "float"),
    Substitution::new("double", "double"),
];
