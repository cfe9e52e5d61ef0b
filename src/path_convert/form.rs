//! 路径形式与转换目标

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PathConvertError;

// ==================== 路径形式 ====================

/// 路径形式
///
/// 每个合法输入恰好属于一种形式，检测顺序见 [`classify`](super::classify)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathForm {
    /// Linux 挂载路径（`/mnt/<盘符>/...`）
    Linux,
    /// Windows 路径（`<盘符>:\...`）
    Windows,
    /// 双反斜杠 Windows 路径（`<盘符>:\\...`）
    DoubleWindows,
}

impl PathForm {
    /// 检测输入字符串的路径形式
    pub fn detect(input: &str) -> super::Result<Self> {
        super::converter::classify(input)
    }

    /// 是否是 Linux 挂载路径
    pub fn is_linux(&self) -> bool {
        matches!(self, Self::Linux)
    }

    /// 是否属于 Windows 一侧（单反斜杠或双反斜杠）
    pub fn is_windows_family(&self) -> bool {
        matches!(self, Self::Windows | Self::DoubleWindows)
    }

    /// 产生相同形式的转换目标
    pub fn native_target(&self) -> ConversionTarget {
        ConversionTarget::from(*self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::DoubleWindows => "double_windows",
        }
    }
}

impl fmt::Display for PathForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== 转换目标 ====================

/// 转换目标
///
/// `Auto` 表示转换为"另一侧"的原生形式：Linux 路径转为 Windows 路径，
/// 任意 Windows 形式转为 Linux 路径。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionTarget {
    #[default]
    Auto,
    Linux,
    Windows,
    DoubleWindows,
}

impl ConversionTarget {
    pub const ALL: [Self; 4] = [Self::Auto, Self::Linux, Self::Windows, Self::DoubleWindows];

    /// 数值编码（Auto = 0, Linux = 1, Windows = 2, DoubleWindows = 3）
    pub fn code(&self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::Linux => 1,
            Self::Windows => 2,
            Self::DoubleWindows => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::DoubleWindows => "double_windows",
        }
    }

    /// 对给定的源形式，返回转换后实际得到的形式
    pub fn resolve(&self, source: PathForm) -> PathForm {
        match self {
            Self::Auto if source.is_linux() => PathForm::Windows,
            Self::Auto => PathForm::Linux,
            Self::Linux => PathForm::Linux,
            Self::Windows => PathForm::Windows,
            Self::DoubleWindows => PathForm::DoubleWindows,
        }
    }
}

impl From<PathForm> for ConversionTarget {
    fn from(form: PathForm) -> Self {
        match form {
            PathForm::Linux => Self::Linux,
            PathForm::Windows => Self::Windows,
            PathForm::DoubleWindows => Self::DoubleWindows,
        }
    }
}

impl TryFrom<i32> for ConversionTarget {
    type Error = PathConvertError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|target| target.code() == code)
            .ok_or_else(|| PathConvertError::InvalidConversionType(code.to_string()))
    }
}

impl FromStr for ConversionTarget {
    type Err = PathConvertError;

    /// 接受规范名称以及常见别名（`win`、`wsl`、`windouble`、`double-windows`）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "linux" | "wsl" => Ok(Self::Linux),
            "windows" | "win" => Ok(Self::Windows),
            "double_windows" | "double-windows" | "windouble" => Ok(Self::DoubleWindows),
            _ => Err(PathConvertError::InvalidConversionType(s.to_string())),
        }
    }
}

impl TryFrom<&str> for ConversionTarget {
    type Error = PathConvertError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ConversionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
