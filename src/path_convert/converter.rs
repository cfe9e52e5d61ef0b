//! WSL 路径转换器
//!
//! 三个基本变换，按需组合：
//! - Linux → Windows：`/mnt/c/Users/me` → `c:\Users\me`
//! - Windows → 双反斜杠：`C:\Users\me` → `C:\\Users\\me`
//! - 双反斜杠 → Linux：`C:\\Users\\me` → `/mnt/C/Users/me`
//!
//! 盘符大小写在所有变换中保持不变。

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::form::{ConversionTarget, PathForm};
use super::resolver::{PathConverter, PathConvertError};
use super::Result;

// ==================== 匹配模式 ====================

/// `/mnt/<盘符>` 开头
static LINUX_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/mnt/[A-Za-z]").expect("valid linux path pattern"));

/// `<盘符>:` 后紧跟两个反斜杠
static DOUBLE_WINDOWS_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]:\\\\").expect("valid double windows path pattern"));

/// `<盘符>:` 开头
static WINDOWS_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]:").expect("valid windows path pattern"));

/// 反斜杠化之后的挂载段 `\mnt\<盘符>`
static MOUNT_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\mnt\\([A-Za-z])").expect("valid mount segment pattern"));

/// 开头的 `<盘符>:`
static DRIVE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]):").expect("valid drive prefix pattern"));

// ==================== 形式检测 ====================

/// 检测输入的路径形式
///
/// 按 Linux、双反斜杠、Windows 的顺序匹配，三种形式互斥。
///
/// # 错误
/// 都不匹配时返回 [`PathConvertError::InvalidPath`]，空字符串同样如此。
pub fn classify(input: &str) -> Result<PathForm> {
    let form = if LINUX_PATH.is_match(input) {
        PathForm::Linux
    } else if DOUBLE_WINDOWS_PATH.is_match(input) {
        PathForm::DoubleWindows
    } else if WINDOWS_PATH.is_match(input) {
        PathForm::Windows
    } else {
        debug!("[PathConverter] 无法识别的路径: {:?}", input);
        return Err(PathConvertError::InvalidPath(input.to_string()));
    };

    debug!("[PathConverter] {:?} 识别为 {}", input, form);
    Ok(form)
}

// ==================== 基本变换 ====================

/// Linux 路径 → Windows 路径
///
/// 先把所有 `/` 替换为 `\`，再把第一个 `\mnt\<盘符>` 替换为 `<盘符>:`。
/// 之后再出现的 `/mnt/<盘符>` 段保持为 `\mnt\<盘符>`。
pub fn linux_to_windows(path: &str) -> String {
    let backslashed = path.replace('/', "\\");
    let converted = MOUNT_SEGMENT.replacen(&backslashed, 1, "${1}:").into_owned();
    trace!("[PathConverter] linux -> windows: {:?} -> {:?}", path, converted);
    converted
}

/// Windows 路径 → 双反斜杠 Windows 路径
///
/// 每个反斜杠单独加倍，已有的连续反斜杠也逐个加倍。
pub fn windows_to_double_windows(path: &str) -> String {
    let converted = path.replace('\\', "\\\\");
    trace!("[PathConverter] windows -> double_windows: {:?} -> {:?}", path, converted);
    converted
}

/// 双反斜杠 Windows 路径 → Linux 路径
///
/// 先把每个 `\\` 替换为 `/`，再把开头的 `<盘符>:` 替换为 `/mnt/<盘符>`。
pub fn double_windows_to_linux(path: &str) -> String {
    let slashed = path.replace("\\\\", "/");
    let converted = DRIVE_PREFIX.replace(&slashed, "/mnt/${1}").into_owned();
    trace!("[PathConverter] double_windows -> linux: {:?} -> {:?}", path, converted);
    converted
}

// ==================== 转换器 ====================

/// 一次转换的完整记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub form: PathForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ConversionTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// WSL 路径转换器
#[derive(Debug, Clone, Copy, Default)]
pub struct WslPathConverter;

impl WslPathConverter {
    pub fn new() -> Self {
        Self
    }

    /// 按源形式和目标组合基本变换
    ///
    /// 调用方需保证 `source` 是 `input` 的检测结果。
    /// 源形式与目标相同时原样返回。
    pub fn rewrite(&self, input: &str, source: PathForm, target: ConversionTarget) -> String {
        use ConversionTarget as T;

        let output = match (source, target) {
            (PathForm::Linux, T::Linux)
            | (PathForm::Windows, T::Windows)
            | (PathForm::DoubleWindows, T::DoubleWindows) => return input.to_string(),

            (PathForm::Linux, T::Auto | T::Windows) => linux_to_windows(input),
            (PathForm::Linux, T::DoubleWindows) => {
                windows_to_double_windows(&linux_to_windows(input))
            }

            (PathForm::DoubleWindows, T::Auto | T::Linux) => double_windows_to_linux(input),
            (PathForm::DoubleWindows, T::Windows) => {
                linux_to_windows(&double_windows_to_linux(input))
            }

            // 没有直接的 Windows → Linux 变换，经由双反斜杠形式
            (PathForm::Windows, T::Auto | T::Linux) => {
                double_windows_to_linux(&windows_to_double_windows(input))
            }
            (PathForm::Windows, T::DoubleWindows) => windows_to_double_windows(input),
        };

        debug!(
            "[PathConverter] {} -> {} ({}): {:?} -> {:?}",
            source,
            target.resolve(source),
            target,
            input,
            output
        );
        output
    }

    /// 转换并返回完整记录
    pub fn report(
        &self,
        input: &str,
        target: ConversionTarget,
    ) -> Result<ConversionReport> {
        let form = classify(input)?;
        Ok(ConversionReport {
            input: input.to_string(),
            form,
            target: Some(target),
            output: Some(self.rewrite(input, form, target)),
        })
    }

    /// 只检测形式的记录
    pub fn classify_report(&self, input: &str) -> Result<ConversionReport> {
        Ok(ConversionReport {
            input: input.to_string(),
            form: classify(input)?,
            target: None,
            output: None,
        })
    }
}

impl PathConverter for WslPathConverter {
    fn classify(&self, input: &str) -> Result<PathForm> {
        classify(input)
    }

    fn convert(&self, input: &str, target: ConversionTarget) -> Result<String> {
        let source = classify(input)?;
        Ok(self.rewrite(input, source, target))
    }
}
