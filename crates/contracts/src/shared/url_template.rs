use crate::enums::Environment;

/// Адрес запуска по умолчанию
pub const DEFAULT_ENDPOINT: &str = "https://yourtool.local/execute";

/// Параметры ссылки запуска.
///
/// Значения подставляются как есть, без percent-encoding: ссылка
/// только отображается пользователю и никуда не отправляется.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionUrl<'a> {
    pub environment: Environment,
    pub tag: &'a str,
    pub use_case: &'a str,
    pub ansible_package: &'a str,
    pub virtual_env: &'a str,
}

impl ExecutionUrl<'_> {
    pub fn render(&self, base_url: &str) -> String {
        format!(
            "{}?env={}&tag={}&use_case={}&ansible_package={}&virtual_env={}",
            base_url,
            self.environment.code(),
            self.tag,
            self.use_case,
            self.ansible_package,
            self.virtual_env
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_custom_base() {
        let url = ExecutionUrl {
            environment: Environment::R0,
            tag: "v2",
            use_case: "switch",
            ansible_package: "pkg",
            virtual_env: "qa",
        }
        .render("http://localhost:8080/run");
        assert_eq!(
            url,
            "http://localhost:8080/run?env=R0&tag=v2&use_case=switch&ansible_package=pkg&virtual_env=qa"
        );
    }
}
