//! 路径转换入口
//!
//! 错误类型、转换器 Trait 以及便捷函数

use std::convert::Infallible;

use super::converter::WslPathConverter;
use super::form::{ConversionTarget, PathForm};
use super::Result;

/// 路径转换错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathConvertError {
    /// 输入不属于任何一种已知路径形式
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// 转换目标不是四种取值之一
    #[error("Invalid conversion type: {0}")]
    InvalidConversionType(String),
}

impl From<Infallible> for PathConvertError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// 路径转换器 Trait
pub trait PathConverter {
    /// 检测输入的路径形式
    fn classify(&self, input: &str) -> Result<PathForm>;

    /// 将输入转换为目标形式
    fn convert(&self, input: &str, target: ConversionTarget) -> Result<String>;
}

/// 便捷函数：转换路径
///
/// `target` 可以是 [`ConversionTarget`]、数值编码（`i32`）或名称（`&str`）。
/// 先检测路径形式，再解析目标，因此非法路径总是报告 `InvalidPath`。
///
/// # 示例
/// ```
/// use wsl_pathconv::{convert, ConversionTarget};
///
/// assert_eq!(convert("/mnt/d/x", ConversionTarget::Auto).unwrap(), r"d:\x");
/// assert_eq!(convert(r"C:\Users\me", "double_windows").unwrap(), r"C:\\Users\\me");
/// assert!(convert("/mnt/c/foo", 999_i32).is_err());
/// ```
pub fn convert<T>(input: &str, target: T) -> Result<String>
where
    T: TryInto<ConversionTarget>,
    PathConvertError: From<T::Error>,
{
    let converter = WslPathConverter::new();
    let source = converter.classify(input)?;
    let target = target.try_into()?;
    Ok(converter.rewrite(input, source, target))
}

/// 便捷函数：自动转换为另一侧的原生形式
pub fn convert_auto(input: &str) -> Result<String> {
    convert(input, ConversionTarget::Auto)
}

/// 便捷函数：转换为 Windows 路径
pub fn to_windows(input: &str) -> Result<String> {
    convert(input, ConversionTarget::Windows)
}

/// 便捷函数：转换为双反斜杠 Windows 路径
pub fn to_double_windows(input: &str) -> Result<String> {
    convert(input, ConversionTarget::DoubleWindows)
}

/// 便捷函数：转换为 Linux 挂载路径
pub fn to_linux(input: &str) -> Result<String> {
    convert(input, ConversionTarget::Linux)
}
