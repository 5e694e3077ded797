//! 命令行设置
//!
//! 设置以 JSON 文件保存，所有字段都有默认值，文件中缺省的字段按默认值处理。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 棋盘绘制风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoardStyle {
    /// 每格一个字符
    #[default]
    Plain,
    /// 每格两个字符，浅色格画成 `██`，两侧加边框
    Checkered,
}

/// 命令行设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// X 方棋子字符
    pub x_glyph: char,
    /// O 方棋子字符
    pub o_glyph: char,
    /// 空格字符
    pub empty_glyph: char,
    /// 绘制风格
    pub style: BoardStyle,
    /// 走子前是否打印合法落点
    pub show_candidates: bool,
    /// 日志级别
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            x_glyph: 'X',
            o_glyph: 'O',
            empty_glyph: '-',
            style: BoardStyle::Plain,
            show_candidates: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// 从 JSON 文件加载设置
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("Failed to parse settings file: {:?}", path))
    }

    /// 从 JSON 字符串解析设置
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 保存设置到 JSON 文件
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, json).with_context(|| format!("Failed to write settings file: {:?}", path))
    }
}
