#![allow(dead_code)]

use kubectl_foreach::config::Settings;
use kubectl_foreach::exec::ArgTemplate;
use kubectl_foreach::filter::parse::parse_filters;
use kubectl_foreach::types::ColorMode;

/// Builder for `Settings` to simplify test setup.
///
/// Defaults: no filters, `get pods`, unlimited workers, prompt enabled,
/// colours off.
pub struct SettingsBuilder {
    filters: Vec<String>,
    command: Vec<String>,
    replace: Option<String>,
    workers: usize,
    skip_prompt: bool,
    auto: bool,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            command: vec!["get".to_string(), "pods".to_string()],
            replace: None,
            workers: 0,
            skip_prompt: false,
            auto: false,
        }
    }

    pub fn filter(mut self, token: &str) -> Self {
        self.filters.push(token.to_string());
        self
    }

    pub fn command(mut self, args: &[&str]) -> Self {
        self.command = args.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn replace(mut self, placeholder: &str) -> Self {
        self.replace = Some(placeholder.to_string());
        self
    }

    pub fn workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    pub fn skip_prompt(mut self, val: bool) -> Self {
        self.skip_prompt = val;
        self
    }

    pub fn auto(mut self, val: bool) -> Self {
        self.auto = val;
        self
    }

    pub fn build(self) -> Settings {
        Settings {
            filters: parse_filters(&self.filters).expect("Failed to parse filters from builder"),
            template: ArgTemplate::new(self.command, self.replace)
                .expect("Failed to build argument template from builder"),
            workers: self.workers,
            kubectl: "kubectl".to_string(),
            skip_prompt: self.skip_prompt,
            auto: self.auto,
            color: ColorMode::Never,
        }
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
