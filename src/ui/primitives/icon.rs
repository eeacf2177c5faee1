use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Add,
    Publish,
    Verify,
    Preview,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Add) => theme::icons::ADD,
            (true, Icon::Publish) => theme::icons::PUBLISH,
            (true, Icon::Verify) => theme::icons::VERIFY,
            (true, Icon::Preview) => theme::icons::PREVIEW,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Add) => theme::icons_ascii::ADD,
            (false, Icon::Publish) => theme::icons_ascii::PUBLISH,
            (false, Icon::Verify) => theme::icons_ascii::VERIFY,
            (false, Icon::Preview) => theme::icons_ascii::PREVIEW,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Add | Icon::Publish | Icon::Verify | Icon::Preview => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
