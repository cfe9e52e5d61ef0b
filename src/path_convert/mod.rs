//! 路径转换模块
//!
//! 在 WSL 互操作边界两侧使用的三种路径形式之间转换：
//! - `/mnt/c/Users/me`（Linux 挂载路径）
//! - `C:\Users\me`（Windows 路径）
//! - `C:\\Users\\me`（双反斜杠 Windows 路径，用于转义场景）

pub mod converter;
pub mod form;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use converter::{
    classify,
    double_windows_to_linux,
    linux_to_windows,
    windows_to_double_windows,
    ConversionReport,
    WslPathConverter,
};
pub use form::{ConversionTarget, PathForm};
pub use resolver::{
    PathConverter,
    PathConvertError,
    convert,
    convert_auto,
    to_double_windows,
    to_linux,
    to_windows,
};

/// 重新导出常用类型
pub type Result<T> = std::result::Result<T, PathConvertError>;
