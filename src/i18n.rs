// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 说明文本按调用方指定的 locale 翻译,不读写全局 locale
// ==========================================

/// 已加载的语言列表
pub fn available_locales() -> Vec<&'static str> {
    rust_i18n::available_locales!()
}

/// 是否支持该语言
pub fn is_supported_locale(locale: &str) -> bool {
    available_locales().iter().any(|l| *l == locale)
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use crop_advisor::i18n::t;
/// let msg = t("explain.alternatives_header", "en");
/// ```
pub fn t(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// 占位符格式: `%{name}`
///
/// # 示例
/// ```no_run
/// use crop_advisor::i18n::t_with_args;
/// let msg = t_with_args("explain.top_pick", "en", &[("crop", "WHEAT")]);
/// ```
pub fn t_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(key, locale);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
