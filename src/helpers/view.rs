use super::AppError;
use actix_web::{http::header::ContentType, HttpResponse};
use anyhow::{Context as _, Result};
use tera::{Context, Tera};

/// Every page the app can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Main,
    Gemini,
    GeminiReply,
    Logs,
    DeleteLogs,
    Telegram,
    PayNow,
}

impl Page {
    pub fn template(&self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Main => "main.html",
            Page::Gemini => "gemini.html",
            Page::GeminiReply => "gemini_reply.html",
            Page::Logs => "logs.html",
            Page::DeleteLogs => "del_logs.html",
            Page::Telegram => "telegram.html",
            Page::PayNow => "paynow.html",
        }
    }
}

/// Page templates, embedded in the binary and compiled once at startup.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Registered together so that `{% extends "base.html" %}` resolves
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            ("index.html", include_str!("../../templates/index.html")),
            ("main.html", include_str!("../../templates/main.html")),
            ("gemini.html", include_str!("../../templates/gemini.html")),
            ("gemini_reply.html", include_str!("../../templates/gemini_reply.html")),
            ("logs.html", include_str!("../../templates/logs.html")),
            ("del_logs.html", include_str!("../../templates/del_logs.html")),
            ("telegram.html", include_str!("../../templates/telegram.html")),
            ("paynow.html", include_str!("../../templates/paynow.html")),
        ])
        .context("Failed to register page templates")?;

        Ok(Self { tera })
    }

    pub fn render(&self, page: Page, context: &Context) -> Result<HttpResponse, AppError> {
        let body = self.tera.render(page.template(), context)?;
        Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body))
    }

    /// Render a page that takes no data.
    pub fn page(&self, page: Page) -> Result<HttpResponse, AppError> {
        self.render(page, &Context::new())
    }
}
