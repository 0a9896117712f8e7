//! 内建命名转换策略。
//!
//! 三个策略均为零尺寸类型，转换逻辑委托给 `heck`；`unformat` 一律回到
//! snake_case，与内部标识符约定对齐。

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase};

use super::Formatter;

/// snake_case 策略：外部命名与内部命名一致。
///
/// `format` 仍执行一次规范化，调用方传入历史遗留的驼峰标识符时也能得到
/// 稳定输出。
#[derive(Clone, Copy, Debug, Default)]
pub struct UnderscoredFormatter;

impl Formatter for UnderscoredFormatter {
    fn format(&self, value: &str) -> String {
        value.to_snake_case()
    }

    fn unformat(&self, value: &str) -> String {
        value.to_snake_case()
    }
}

/// lowerCamelCase 策略。
#[derive(Clone, Copy, Debug, Default)]
pub struct CamelizedFormatter;

impl Formatter for CamelizedFormatter {
    fn format(&self, value: &str) -> String {
        value.to_lower_camel_case()
    }

    fn unformat(&self, value: &str) -> String {
        value.to_snake_case()
    }
}

/// dash-case 策略（配置默认值）。
#[derive(Clone, Copy, Debug, Default)]
pub struct DasherizedFormatter;

impl Formatter for DasherizedFormatter {
    fn format(&self, value: &str) -> String {
        value.to_kebab_case()
    }

    fn unformat(&self, value: &str) -> String {
        value.to_snake_case()
    }
}
