//! WSL 互操作检测
//!
//! 宿主是否运行在 WSL 下只取决于一个标记文件是否存在。
//! 结果在启动时计算一次，以普通布尔值显式传给需要它的调用方。

use std::path::{Path, PathBuf};

use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

/// WSL 注册的 binfmt 互操作标记
pub const WSL_INTEROP_MARKER: &str = "/proc/sys/fs/binfmt_misc/WSLInterop";

/// 互操作探测器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteropProbe {
    marker: PathBuf,
}

impl InteropProbe {
    /// 使用自定义标记路径创建探测器（用于配置与测试）
    pub fn new(marker: impl Into<PathBuf>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &Path {
        &self.marker
    }

    /// 检查标记文件是否存在
    pub fn detect(&self) -> bool {
        let present = self.marker.exists();
        debug!("[InteropProbe] {:?} 存在: {}", self.marker, present);
        present
    }
}

impl Default for InteropProbe {
    fn default() -> Self {
        Self::new(WSL_INTEROP_MARKER)
    }
}

static IS_WSL: Lazy<bool> = Lazy::new(|| InteropProbe::default().detect());

/// 当前进程是否运行在 WSL 下（默认标记，只探测一次）
pub fn is_wsl() -> bool {
    *IS_WSL
}

/// 宿主能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    pub wsl_interop: bool,
}

impl HostInfo {
    pub fn detect(probe: &InteropProbe) -> Self {
        Self {
            wsl_interop: probe.detect(),
        }
    }
}
