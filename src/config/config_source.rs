// ==========================================
// 时刻维度表生成器 - 配置来源 Trait
// ==========================================
// 职责: 定义键值配置的读取接口（不包含解析与校验）
// 实现者: EnvSource（进程环境变量）/ MapSource（内存表，测试用）
// ==========================================

use std::collections::HashMap;

// ==========================================
// ConfigSource Trait
// ==========================================
pub trait ConfigSource {
    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 已设置（可能为空字符串）
    /// - None: 未设置
    fn get(&self, key: &str) -> Option<String>;

    /// 配置是否存在（空字符串也视为存在）
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// 进程环境变量
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        // 非 UTF-8 值视为未设置
        std::env::var(key).ok()
    }
}

/// 内存键值表
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式设置配置值
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
