//! WSL 路径转换库
//!
//! 在 `/mnt/c/...`、`C:\...` 与 `C:\\...` 三种路径形式之间转换。
//!
//! ```
//! use wsl_pathconv::{classify, to_linux, to_windows, PathForm};
//!
//! assert_eq!(classify(r"C:\Users\me").unwrap(), PathForm::Windows);
//! assert_eq!(to_linux(r"C:\Users\me").unwrap(), "/mnt/C/Users/me");
//! assert_eq!(to_windows("/mnt/c/Users/me").unwrap(), r"c:\Users\me");
//! ```

pub mod config;
pub mod logging;
pub mod path_convert;
pub mod platform;

pub use path_convert::{
    classify,
    convert,
    convert_auto,
    to_double_windows,
    to_linux,
    to_windows,
    ConversionReport,
    ConversionTarget,
    PathConvertError,
    PathConverter,
    PathForm,
    WslPathConverter,
};
pub use platform::{is_wsl, HostInfo, InteropProbe};
